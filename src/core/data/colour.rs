#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self::grey(0);

    /// A colour with the same intensity on all three channels.
    #[must_use]
    pub const fn grey(intensity: u8) -> Self {
        Self {
            r: intensity,
            g: intensity,
            b: intensity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grey_sets_all_channels() {
        assert_eq!(Colour::grey(41), Colour { r: 41, g: 41, b: 41 });
    }

    #[test]
    fn test_black_is_zero() {
        assert_eq!(Colour::BLACK, Colour::default());
    }
}
