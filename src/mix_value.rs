/// Blend factor between two textures, kept in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixValue(f32);

impl MixValue {
    pub const INITIAL: f32 = 0.2;
    /// change per polled frame while Up/Down is held
    pub const STEP: f32 = 0.025;

    pub fn new(value: f32) -> Self {
        MixValue(value.clamp(0.0, 1.0))
    }

    pub fn get(self) -> f32 {
        self.0
    }

    pub fn increase(&mut self) {
        self.0 = (self.0 + Self::STEP).min(1.0);
    }

    pub fn decrease(&mut self) {
        self.0 = (self.0 - Self::STEP).max(0.0);
    }
}

impl Default for MixValue {
    fn default() -> Self {
        MixValue(Self::INITIAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_never_exceeds_one() {
        let mut mix = MixValue::default();
        assert_eq!(mix.get(), 0.2);
        for _ in 0..100 {
            mix.increase();
            assert!(mix.get() <= 1.0);
        }
        assert_eq!(mix.get(), 1.0);
    }

    #[test]
    fn down_never_below_zero() {
        let mut mix = MixValue::default();
        for _ in 0..100 {
            mix.decrease();
            assert!(mix.get() >= 0.0);
        }
        assert_eq!(mix.get(), 0.0);
    }

    #[test]
    fn new_clamps() {
        assert_eq!(MixValue::new(3.0).get(), 1.0);
        assert_eq!(MixValue::new(-1.0).get(), 0.0);
    }
}
