use std::{
    cmp::Ordering,
    fmt::{Debug, Formatter, Result as FmtResult},
    ops::{Deref, Index},
    slice::SliceIndex,
};

use crate::model::control_point::ControlPoint;

/// A [`Vec`] whose elements are guaranteed to be in order based on the given comparator.
///
/// Only readable from the outside; elements are added through
/// [`ControlPointInfo`](crate::model::control_point::ControlPointInfo).
///
/// ```compile_fail
/// use rosu_timeline::model::control_point::{SortedVec, TimingPoint};
///
/// let points: SortedVec<TimingPoint> = SortedVec::default();
/// let _ = points.find(&TimingPoint::new(0.0, 500.0));
/// ```
///
/// ```compile_fail
/// use rosu_timeline::model::control_point::{SortedVec, TimingPoint};
///
/// let points: SortedVec<TimingPoint> = SortedVec::default();
/// let _: Vec<TimingPoint> = points.into_inner();
/// ```
#[derive(Clone)]
pub struct SortedVec<T> {
    inner: Vec<T>,
    cmp: fn(&T, &T) -> Ordering,
}

impl<T> SortedVec<T> {
    /// Same as [`slice::binary_search_by`] with the internal compare function
    #[inline]
    fn find(&self, value: &T) -> Result<usize, usize> {
        self.inner
            .binary_search_by(|elem| (self.cmp)(elem, value))
    }

    /// Push a new value into the sorted list.
    /// If there is already an element that matches the new value,
    /// the old element will be replaced and returned.
    pub(crate) fn push(&mut self, value: T) -> Option<T> {
        match self.find(&value) {
            Ok(i) => Some(std::mem::replace(&mut self.inner[i], value)),
            Err(i) if i == self.inner.len() => {
                self.inner.push(value);

                None
            }
            Err(i) => {
                self.inner.insert(i, value);

                None
            }
        }
    }

    pub(crate) fn remove(&mut self, idx: usize) -> T {
        self.inner.remove(idx)
    }

    pub(crate) fn clear(&mut self) {
        self.inner.clear();
    }
}

impl<P: ControlPoint> SortedVec<P> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Vec::with_capacity(capacity),
            cmp: |a, b| cmp_time(a.time(), b.time()),
        }
    }

    /// Index of the last element whose time is less than or equal to `time`.
    pub(crate) fn index_at(&self, time: f64) -> Option<usize> {
        self.inner
            .binary_search_by(|point| cmp_time(point.time(), time))
            .map_or_else(|i| i.checked_sub(1), Some)
    }

    /// Index of the element whose time is exactly `time`.
    pub(crate) fn index_of(&self, time: f64) -> Option<usize> {
        self.inner
            .binary_search_by(|point| cmp_time(point.time(), time))
            .ok()
    }
}

/// Total order on times where `-0.0` and `0.0` are the same time.
fn cmp_time(a: f64, b: f64) -> Ordering {
    (a + 0.0).total_cmp(&(b + 0.0))
}

impl<T> Deref for SortedVec<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        <Vec<T> as Deref>::deref(&self.inner)
    }
}

impl<T, I> Index<I> for SortedVec<T>
where
    I: SliceIndex<[T]>,
{
    type Output = <I as SliceIndex<[T]>>::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        <Vec<T> as Index<I>>::index(&self.inner, index)
    }
}

impl<T: Debug> Debug for SortedVec<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        <Vec<T> as Debug>::fmt(&self.inner, f)
    }
}

impl<T: PartialEq> PartialEq for SortedVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<P: ControlPoint> Default for SortedVec<P> {
    #[inline]
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<P: ControlPoint> FromIterator<P> for SortedVec<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut this = Self::with_capacity(iter.size_hint().0);

        for point in iter {
            this.push(point);
        }

        this
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for SortedVec<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.inner.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, P> serde::Deserialize<'de> for SortedVec<P>
where
    P: ControlPoint + serde::Deserialize<'de>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Unordered input is re-sorted on the way in
        Vec::<P>::deserialize(deserializer).map(Self::from_iter)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::control_point::{EffectPoint, TimingPoint};

    use super::SortedVec;

    #[test]
    fn sorts_on_push() {
        let mut v = SortedVec {
            inner: Vec::new(),
            cmp: <i32 as Ord>::cmp,
        };

        v.push(42);
        v.push(13);
        v.push(20);
        v.push(0);

        assert_eq!(&v[..], &[0_i32, 13, 20, 42]);
    }

    #[test]
    fn replaces_on_equal_time() {
        let mut v = SortedVec::default();

        assert!(v.push(TimingPoint::new(100.0, 500.0)).is_none());
        let replaced = v.push(TimingPoint::new(100.0, 250.0));

        assert_eq!(replaced, Some(TimingPoint::new(100.0, 500.0)));
        assert_eq!(&v[..], &[TimingPoint::new(100.0, 250.0)]);
    }

    #[test]
    fn signed_zeros_are_the_same_time() {
        let mut v = SortedVec::default();
        v.push(TimingPoint::new(0.0, 500.0));

        assert_eq!(
            v.push(TimingPoint::new(-0.0, 250.0)),
            Some(TimingPoint::new(0.0, 500.0))
        );
        assert_eq!(v.len(), 1);
        assert_eq!(v.index_of(0.0), Some(0));
        assert_eq!(v.index_at(-0.0), Some(0));
    }

    #[test]
    fn index_at_time() {
        let v: SortedVec<EffectPoint> = [0.0, 1000.0, 2000.0]
            .into_iter()
            .map(|time| EffectPoint::new(time, false))
            .collect();

        assert_eq!(v.index_at(-1.0), None);
        assert_eq!(v.index_at(0.0), Some(0));
        assert_eq!(v.index_at(1999.0), Some(1));
        assert_eq!(v.index_at(5000.0), Some(2));
        assert_eq!(v.index_of(1000.0), Some(1));
        assert_eq!(v.index_of(1001.0), None);
    }
}
