use super::*;

pub type Hp = i32;

/// Hit points and the hurt flash of a living entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Health {
    /// Can drop below zero.
    pub health: Hp,
    /// Whether the hurt flash is showing.
    pub hurt: bool,
    pub hurt_time: i32,
    pub base_hurt_time: i32,
}

impl Health {
    pub fn new(health: Hp, base_hurt_time: i32) -> Self {
        Self {
            health,
            hurt: false,
            hurt_time: base_hurt_time,
            base_hurt_time,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Take a hit and start the hurt flash.
    pub fn hit(&mut self, amount: Hp) {
        self.health -= amount;
        self.hurt = true;
    }

    /// Advance the hurt flash by one tick.
    /// Returns `true` on the tick the flash ends.
    pub fn tick(&mut self) -> bool {
        if !self.hurt {
            return false;
        }
        if self.hurt_time > 0 {
            self.hurt_time -= 1;
            return false;
        }
        self.hurt = false;
        self.hurt_time = self.base_hurt_time;
        true
    }
}
