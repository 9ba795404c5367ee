use angband_types::Random;
use rand_core::*;
use rand_isaac::Isaac64Rng;

/// Dungeon depth at which `m_bonus` reaches its full value.
pub const MAX_DEPTH: i32 = 128;

/// How to evaluate a [`Random`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aspect {
    Minimise,
    Average,
    Maximise,
    Randomise,
}

/// Game RNG over ISAAC-64.
#[derive(Clone)]
pub struct GameRng {
    inner: Isaac64Rng,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Isaac64Rng::seed_from_u64(seed),
        }
    }

    /// `0 <= randint0(m) < m`.
    pub fn randint0(&mut self, m: i32) -> i32 {
        if m <= 0 {
            log::warn!("randint0({m}) attempted");
            return 0;
        }
        (self.inner.next_u64() % m as u64) as i32
    }

    /// `1 <= randint1(m) <= m`.
    pub fn randint1(&mut self, m: i32) -> i32 {
        if m <= 0 {
            log::warn!("randint1({m}) attempted");
            return 1;
        }
        self.randint0(m) + 1
    }

    pub fn one_in(&mut self, n: i32) -> bool {
        self.randint0(n) == 0
    }

    /// Sum of `num` rolls of a `sides`-sided die.
    pub fn damroll(&mut self, num: i32, sides: i32) -> i32 {
        if sides <= 0 || num <= 0 {
            if num < 0 || sides < 0 {
                log::warn!("damroll({num},{sides}) attempted");
            }
            return 0;
        }
        (0..num).map(|_| self.randint1(sides)).sum()
    }

    /// Divide with the remainder turned into a chance of rounding up.
    fn simulate_division(&mut self, dividend: i32, divisor: i32) -> i32 {
        let quotient = dividend / divisor;
        let remainder = dividend % divisor;
        if self.randint0(divisor) < remainder {
            quotient + 1
        } else {
            quotient
        }
    }

    /// Roughly bell-shaped value around `mean` spread by `stand`.
    fn rand_spread(&mut self, mean: i32, stand: i32) -> i32 {
        if stand < 1 {
            return mean;
        }
        let a = self.randint0(2 * stand + 1);
        let b = self.randint0(2 * stand + 1);
        mean + (a + b) / 2 - stand
    }

    /// Level-scaled bonus in `0..=max`, centred on `max * level / MAX_DEPTH`.
    pub fn m_bonus(&mut self, max: i32, level: i32) -> i32 {
        if max <= 0 {
            return 0;
        }
        let level = level.clamp(0, MAX_DEPTH - 1);
        let bonus = self.simulate_division(max * level, MAX_DEPTH);
        let stand = self.simulate_division(max, 4);
        self.rand_spread(bonus, stand).clamp(0, max)
    }

    /// Evaluate a random value at a dungeon level.
    pub fn randcalc(&mut self, v: Random, level: i32, aspect: Aspect) -> i32 {
        if aspect != Aspect::Randomise {
            return randcalc_fixed(v, level, aspect);
        }
        let sign = if v.dice < 0 { -1 } else { 1 };
        v.base + sign * self.damroll(v.dice.abs(), v.sides) + self.m_bonus(v.m_bonus, level)
    }
}

/// Evaluate a random value without rolling; `Randomise` is treated as
/// `Average`.
pub fn randcalc_fixed(v: Random, level: i32, aspect: Aspect) -> i32 {
    let sign = if v.dice < 0 { -1 } else { 1 };
    let dice = v.dice.abs();
    let (rolled, bonus) = match aspect {
        Aspect::Minimise => (dice.min(dice * v.sides), 0),
        Aspect::Maximise => (dice * v.sides, v.m_bonus),
        Aspect::Average | Aspect::Randomise => (
            dice * (v.sides + 1) / 2,
            v.m_bonus * level.clamp(0, MAX_DEPTH - 1) / MAX_DEPTH,
        ),
    };
    v.base + sign * rolled + bonus
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        for _ in 0..50 {
            assert_eq!(a.randint0(1000), b.randint0(1000));
        }
    }

    #[test]
    fn randint_ranges() {
        let mut rng = GameRng::new(7);
        for _ in 0..500 {
            let x = rng.randint0(6);
            assert!((0..6).contains(&x));
            let y = rng.randint1(6);
            assert!((1..=6).contains(&y));
        }
    }

    #[test]
    fn invalid_arguments_are_harmless() {
        let mut rng = GameRng::new(1);
        assert_eq!(rng.randint0(0), 0);
        assert_eq!(rng.randint1(-3), 1);
        assert_eq!(rng.damroll(-1, 4), 0);
        assert_eq!(rng.damroll(3, 0), 0);
    }

    #[test]
    fn damroll_bounds() {
        let mut rng = GameRng::new(3);
        for _ in 0..500 {
            let x = rng.damroll(3, 6);
            assert!((3..=18).contains(&x));
        }
    }

    #[test]
    fn m_bonus_stays_in_range() {
        let mut rng = GameRng::new(9);
        for level in [0, 10, 64, 127, 500] {
            for _ in 0..100 {
                let x = rng.m_bonus(20, level);
                assert!((0..=20).contains(&x));
            }
        }
        assert_eq!(rng.m_bonus(0, 50), 0);
    }

    #[test]
    fn randcalc_aspects() {
        let v = Random::new(5, 2, 10, 50);
        assert_eq!(randcalc_fixed(v, 0, Aspect::Minimise), 7);
        assert_eq!(randcalc_fixed(v, 0, Aspect::Maximise), 75);
        assert_eq!(randcalc_fixed(v, 64, Aspect::Average), 5 + 11 + 25);
        let mut rng = GameRng::new(11);
        for _ in 0..100 {
            let x = rng.randcalc(v, 64, Aspect::Randomise);
            assert!((7..=75).contains(&x));
        }
    }

    #[test]
    fn randcalc_negative_dice() {
        let v = Random::new(-2, -1, 4, 0);
        assert_eq!(randcalc_fixed(v, 0, Aspect::Minimise), -3);
        assert_eq!(randcalc_fixed(v, 0, Aspect::Maximise), -6);
    }
}
