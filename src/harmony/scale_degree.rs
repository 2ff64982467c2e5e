/// A scale degree within a diatonic key, from the tonic (I) through the seventh (VII).
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Default, Debug, Ord, PartialOrd, strum_macros::FromRepr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScaleDegree {
    #[default]
    I = 1,
    II,
    III,
    IV,
    V,
    VI,
    VII,
}

impl ScaleDegree {
    pub fn as_num(self) -> u8 {
        self as _
    }

    pub fn from_num(num: u8) -> Option<Self> {
        Self::from_repr(num)
    }
}
