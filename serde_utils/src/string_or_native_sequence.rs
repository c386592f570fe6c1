// Like `serde_utils::string_or_native` but for bounded collections of numbers.

use core::{
    fmt::{Display, Formatter, Result as FmtResult},
    marker::PhantomData,
    str::FromStr,
};

use itertools::Itertools as _;
use serde::{
    de::{Error, SeqAccess, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};
use try_from_iterator::TryFromIterator;

#[derive(Deserialize, Serialize)]
#[serde(bound(
    deserialize = "T: Deserialize<'de> + FromStr<Err: Display>",
    serialize = "T: Serialize + Display",
))]
struct Element<T>(#[serde(with = "crate::string_or_native")] T);

pub fn deserialize<'de, I, T, D>(deserializer: D) -> Result<T, D::Error>
where
    I: Deserialize<'de> + FromStr<Err: Display>,
    T: TryFromIterator<I, Error: Display>,
    D: Deserializer<'de>,
{
    struct SequenceVisitor<I, T>(PhantomData<(I, T)>);

    impl<'de, I, T> Visitor<'de> for SequenceVisitor<I, T>
    where
        I: Deserialize<'de> + FromStr<Err: Display>,
        T: TryFromIterator<I, Error: Display>,
    {
        type Value = T;

        fn expecting(&self, formatter: &mut Formatter) -> FmtResult {
            formatter.write_str("a sequence of strings or integers")
        }

        fn visit_seq<S: SeqAccess<'de>>(self, mut seq: S) -> Result<Self::Value, S::Error> {
            itertools::process_results(
                core::iter::from_fn(|| seq.next_element().transpose())
                    .map_ok(|Element(item)| item),
                |items| T::try_from_iter(items).map_err(S::Error::custom),
            )?
        }
    }

    deserializer.deserialize_seq(SequenceVisitor(PhantomData))
}

pub fn serialize<S: Serializer>(
    items: impl IntoIterator<Item = impl Serialize + Display>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(items.into_iter().map(Element))
}
