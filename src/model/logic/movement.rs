use super::*;

impl World {
    /// Move an entity by a fractional velocity, resolving collisions against
    /// every solid entity in arena order.
    ///
    /// Damage caused by the mover is dealt as soon as the move is over.
    pub fn move_entity(&mut self, id: Id, velocity: vec2<f32>) {
        let obstacles = self.obstacles();
        let Some(entity) = self.entities.get_mut(id) else {
            log::warn!("tried to move a missing entity {:?}", id);
            return;
        };

        let kind = &entity.kind;
        let mut hits = Vec::new();
        let mut spent = false;
        entity
            .body
            .move_by(Some(id), velocity, &obstacles, |other| {
                if spent {
                    return Resolution::PassThrough;
                }
                let reaction = kind.on_contact(other.id);
                if reaction.damage != 0 {
                    hits.push((other.id, reaction.damage));
                }
                spent = reaction.despawn;
                reaction.resolution
            });

        for (target, amount) in hits {
            self.damage(target, amount);
        }
        if spent {
            log::debug!("{:?} is used up", id);
            self.entities.remove(id);
        }
    }
}
