pub const BYTES_PER_CHUNK: usize = 32;
