use num::{Float, NumCast, Zero};
use rand::distributions::uniform::SampleUniform;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::{Debug, Display};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

pub trait Primitive:
    Add
    + AddAssign
    + Sum
    + Sub
    + SubAssign
    + Zero
    + Float
    + NumCast
    + SampleUniform
    + PartialOrd
    + Copy
    + Default
    + Display
    + Debug
    + Serialize
    + DeserializeOwned
    + Sync
    + Send
    + 'static
    + for<'a> AddAssign<&'a Self>
    + for<'a> Sub<&'a Self>
{
}
impl Primitive for f32 {}
impl Primitive for f64 {}
