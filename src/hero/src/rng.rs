//src/hero/src/rng.rs
use rand::{
    distr::uniform,
    {Rng, SeedableRng},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Sides of the crit die.
pub const ROLL_SIDES: u8 = 10;

/// Source of the d10 draw behind a critical hit
pub trait CritRoll {
    /// Uniform integer in `1..=ROLL_SIDES`.
    fn roll_d10(&mut self) -> u8;
}

/// 英雄专用的确定性RNG系统
#[derive(Debug, Clone)]
pub struct HeroRng {
    rng: Pcg32,
    seed: u64,
}

impl HeroRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    /// 使用随机种子创建新RNG
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// 获取当前种子值
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// 重置RNG状态（使用当前种子）
    pub fn reset(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
    }

    /// 使用新种子重置RNG
    pub fn reseed(&mut self, new_seed: u64) {
        self.seed = new_seed;
        self.reset();
    }

    /// 生成指定范围内的随机值
    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: uniform::SampleUniform,
        R: uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }
}

impl CritRoll for HeroRng {
    fn roll_d10(&mut self) -> u8 {
        self.random_range(1..=ROLL_SIDES)
    }
}

impl<T: CritRoll + ?Sized> CritRoll for &mut T {
    fn roll_d10(&mut self) -> u8 {
        (**self).roll_d10()
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
///
/// An empty script always rolls `ROLL_SIDES` (never a critical). Values are
/// clamped into `1..=ROLL_SIDES`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRoll {
    rolls: Vec<u8>,
    cursor: usize,
}

impl ScriptedRoll {
    pub fn new(rolls: impl IntoIterator<Item = u8>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
            cursor: 0,
        }
    }

    pub fn always(roll: u8) -> Self {
        Self::new([roll])
    }
}

impl CritRoll for ScriptedRoll {
    fn roll_d10(&mut self) -> u8 {
        if self.rolls.is_empty() {
            return ROLL_SIDES;
        }
        let roll = self.rolls[self.cursor % self.rolls.len()];
        self.cursor = self.cursor.wrapping_add(1);
        roll.clamp(1, ROLL_SIDES)
    }
}

// 序列化实现：只保存种子
impl Serialize for HeroRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u64(self.seed)
    }
}

impl<'de> Deserialize<'de> for HeroRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(Self::new(seed))
    }
}
