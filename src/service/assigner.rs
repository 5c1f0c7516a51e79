use rand::{seq::IndexedRandom, Rng};

use crate::{
    error::dispatch::DispatchError,
    model::{user::UserState, weapon::Weapon},
};

/// Draws weapons for users.
pub struct WeaponAssigner;

impl WeaponAssigner {
    /// Picks one weapon per user, uniformly and independently, with replacement.
    ///
    /// Users are returned in the order given, paired with their draw.
    ///
    /// # Returns
    /// - `Ok(Vec<(UserState, &Weapon)>)` - One pair per user
    /// - `Err(DispatchError::NoWeaponsAvailable)` - Catalog is empty
    pub fn assign<'w, R: Rng + ?Sized>(
        users: &[UserState],
        catalog: &'w [Weapon],
        rng: &mut R,
    ) -> Result<Vec<(UserState, &'w Weapon)>, DispatchError> {
        if catalog.is_empty() {
            return Err(DispatchError::NoWeaponsAvailable);
        }

        users
            .iter()
            .map(|user| {
                catalog
                    .choose(rng)
                    .map(|weapon| (user.clone(), weapon))
                    .ok_or(DispatchError::NoWeaponsAvailable)
            })
            .collect()
    }
}
