use thiserror::Error;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum Error {
    #[error("withdrawal credentials do not embed an execution address")]
    CredentialsNotExecution,
}
