//! `serde` support, enabled with the `serde` feature. A set is written as its elements in
//! ascending order and read back from any sequence.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::TreeSet;

impl<T: Serialize> Serialize for TreeSet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T> Deserialize<'de> for TreeSet<T>
where
    T: Deserialize<'de> + Ord,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(|elements| elements.into_iter().collect())
    }
}
