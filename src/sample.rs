use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, VecDeque};
use std::hash::BuildHasher;
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

/// A type with a canonical, deterministic sample value.
///
/// Samples are plain values: calling `sample()` twice yields equal values,
/// and nothing about them depends on the environment. Derived fixtures look
/// up the sample of every field type through this trait.
pub trait Sampleable: Sized {
    fn sample() -> Self;
}

macro_rules! sample_as {
    ($value:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl Sampleable for $ty {
                #[inline]
                fn sample() -> Self {
                    $value
                }
            }
        )+
    };
}

sample_as!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
sample_as!(0.0 => f32, f64);
sample_as!(false => bool);
sample_as!('a' => char);
sample_as!(() => ());
sample_as!(String::new() => String);
sample_as!("" => &'static str);
sample_as!(Duration::ZERO => Duration);

impl<T> Sampleable for Option<T> {
    fn sample() -> Self {
        None
    }
}

impl<T: ?Sized> Sampleable for PhantomData<T> {
    fn sample() -> Self {
        PhantomData
    }
}

macro_rules! sample_empty {
    ($($ty:ty => [$($generics:tt)*]),+ $(,)?) => {
        $(
            impl<$($generics)*> Sampleable for $ty {
                fn sample() -> Self {
                    Self::default()
                }
            }
        )+
    };
}

sample_empty! {
    Vec<T> => [T],
    VecDeque<T> => [T],
    BTreeSet<T> => [T],
    BTreeMap<K, V> => [K, V],
    BinaryHeap<T> => [T: Ord],
    HashSet<T, S> => [T, S: BuildHasher + Default],
    HashMap<K, V, S> => [K, V, S: BuildHasher + Default],
}

macro_rules! sample_wrapped {
    ($($ty:ident),+) => {
        $(
            impl<T: Sampleable> Sampleable for $ty<T> {
                fn sample() -> Self {
                    $ty::new(T::sample())
                }
            }
        )+
    };
}

sample_wrapped!(Box, Rc, Arc);

impl<T: Sampleable, const N: usize> Sampleable for [T; N] {
    fn sample() -> Self {
        std::array::from_fn(|_| T::sample())
    }
}

macro_rules! sample_tuple {
    ($($name:ident)+) => {
        impl<$($name: Sampleable),+> Sampleable for ($($name,)+) {
            fn sample() -> Self {
                ($($name::sample(),)+)
            }
        }
    };
}

sample_tuple!(A);
sample_tuple!(A B);
sample_tuple!(A B C);
sample_tuple!(A B C D);
sample_tuple!(A B C D E);
sample_tuple!(A B C D E F);
sample_tuple!(A B C D E F G);
sample_tuple!(A B C D E F G H);
sample_tuple!(A B C D E F G H I);
sample_tuple!(A B C D E F G H I J);
sample_tuple!(A B C D E F G H I J K);
sample_tuple!(A B C D E F G H I J K L);
