use std::borrow::Cow;

use crate::model::beatmap::Beatmap;

/// Either a borrowed [`Beatmap`] or already calculated difficulty attributes.
///
/// Performance calculators start out with a map and replace it with the
/// attributes once they had to be calculated so repeated calculations come
/// for free.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum MapOrAttrs<'map, A> {
    Map(Cow<'map, Beatmap>),
    Attrs(A),
}

impl<A> MapOrAttrs<'_, A> {
    /// Insert `attrs` and return a reference to them.
    pub(crate) fn insert_attrs(&mut self, attrs: A) -> &A {
        *self = Self::Attrs(attrs);

        match self {
            Self::Attrs(attrs) => attrs,
            Self::Map(_) => unreachable!(),
        }
    }
}

impl<'map, A> From<&'map Beatmap> for MapOrAttrs<'map, A> {
    fn from(map: &'map Beatmap) -> Self {
        Self::Map(Cow::Borrowed(map))
    }
}

impl<A> From<Beatmap> for MapOrAttrs<'_, A> {
    fn from(map: Beatmap) -> Self {
        Self::Map(Cow::Owned(map))
    }
}
