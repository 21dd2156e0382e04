use std::fmt;
use std::str::FromStr;

/// Price bucket used to filter the catalog.
///
/// Bounded bands are half-open: the lower bound is inclusive, the upper
/// bound exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PriceBand {
    /// `0+`: every price.
    #[default]
    Any,
    /// `0-50`
    Under50,
    /// `50-100`
    From50To100,
    /// `100+`
    Over100,
}

impl PriceBand {
    pub const ALL: [PriceBand; 4] = [
        PriceBand::Any,
        PriceBand::Under50,
        PriceBand::From50To100,
        PriceBand::Over100,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PriceBand::Any => "0+",
            PriceBand::Under50 => "0-50",
            PriceBand::From50To100 => "50-100",
            PriceBand::Over100 => "100+",
        }
    }

    pub fn contains(&self, price: f64) -> bool {
        match self {
            PriceBand::Any => true,
            PriceBand::Under50 => (0.0..50.0).contains(&price),
            PriceBand::From50To100 => (50.0..100.0).contains(&price),
            PriceBand::Over100 => price >= 100.0,
        }
    }
}

/// Rating bucket used to filter the catalog.
///
/// Bounds are inclusive on both ends, so a rating sitting exactly on an
/// integer boundary (e.g. `2.0`) matches both neighbouring bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RatingBand {
    /// `0-5`: every rating.
    #[default]
    Any,
    /// `1-2`
    OneToTwo,
    /// `2-3`
    TwoToThree,
    /// `3-4`
    ThreeToFour,
    /// `4-5`
    FourToFive,
}

impl RatingBand {
    pub const ALL: [RatingBand; 5] = [
        RatingBand::Any,
        RatingBand::OneToTwo,
        RatingBand::TwoToThree,
        RatingBand::ThreeToFour,
        RatingBand::FourToFive,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RatingBand::Any => "0-5",
            RatingBand::OneToTwo => "1-2",
            RatingBand::TwoToThree => "2-3",
            RatingBand::ThreeToFour => "3-4",
            RatingBand::FourToFive => "4-5",
        }
    }

    pub fn contains(&self, rate: f64) -> bool {
        match self {
            RatingBand::Any => true,
            RatingBand::OneToTwo => (1.0..=2.0).contains(&rate),
            RatingBand::TwoToThree => (2.0..=3.0).contains(&rate),
            RatingBand::ThreeToFour => (3.0..=4.0).contains(&rate),
            RatingBand::FourToFive => (4.0..=5.0).contains(&rate),
        }
    }
}

/// A band label that matches none of the known bands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBandError {
    kind: &'static str,
    label: String,
}

impl ParseBandError {
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for ParseBandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} band: {:?}", self.kind, self.label)
    }
}

impl std::error::Error for ParseBandError {}

impl FromStr for PriceBand {
    type Err = ParseBandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        // The selector starts out unset, which means no price restriction.
        if label.is_empty() {
            return Ok(PriceBand::Any);
        }
        PriceBand::ALL
            .into_iter()
            .find(|band| band.label() == label)
            .ok_or_else(|| ParseBandError {
                kind: "price",
                label: s.to_string(),
            })
    }
}

impl FromStr for RatingBand {
    type Err = ParseBandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        RatingBand::ALL
            .into_iter()
            .find(|band| band.label() == label)
            .ok_or_else(|| ParseBandError {
                kind: "rating",
                label: s.to_string(),
            })
    }
}

impl fmt::Display for PriceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for RatingBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
