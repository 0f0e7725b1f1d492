use engine::Vec2;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum KeyFlag {
    LabKey,
    PlatformKey,
}

impl KeyFlag {
    pub(crate) const ALL: [KeyFlag; 2] = [KeyFlag::LabKey, KeyFlag::PlatformKey];

    pub(crate) fn name(self) -> &'static str {
        match self {
            KeyFlag::LabKey => "lab_key",
            KeyFlag::PlatformKey => "platform_key",
        }
    }

    /// Shown when a gate needing this key is touched without it.
    pub(crate) fn locked_message(self) -> &'static str {
        match self {
            KeyFlag::LabKey => "You need the Lab Key to enter!",
            KeyFlag::PlatformKey => "You need the Platform Key!",
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            KeyFlag::LabKey => "Lab Key",
            KeyFlag::PlatformKey => "Platform Key",
        }
    }
}

/// Key flags earned by finishing mini-games. All start unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Inventory {
    lab_key: bool,
    platform_key: bool,
}

impl Inventory {
    pub(crate) fn has(&self, flag: KeyFlag) -> bool {
        match flag {
            KeyFlag::LabKey => self.lab_key,
            KeyFlag::PlatformKey => self.platform_key,
        }
    }

    pub(crate) fn grant(&mut self, flag: KeyFlag) {
        let slot = match flag {
            KeyFlag::LabKey => &mut self.lab_key,
            KeyFlag::PlatformKey => &mut self.platform_key,
        };
        if !*slot {
            info!(flag = flag.name(), "inventory_flag_granted");
        }
        *slot = true;
    }

    pub(crate) fn reset_all(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn is_empty(&self) -> bool {
        KeyFlag::ALL.iter().all(|flag| !self.has(*flag))
    }
}

/// The princess. Her position is unset until the room is first entered.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Companion {
    position: Option<Vec2>,
    attached: bool,
}

impl Companion {
    /// Sets the start position the first time only.
    pub(crate) fn ensure_initialized(&mut self, start: Vec2) {
        if self.position.is_none() {
            self.position = Some(start);
        }
    }

    pub(crate) fn position(&self) -> Option<Vec2> {
        self.position
    }

    pub(crate) fn is_attached(&self) -> bool {
        self.attached
    }

    pub(crate) fn attach(&mut self) {
        if !self.attached {
            info!("companion_attached");
        }
        self.attached = true;
    }

    /// Moves an attached companion straight to `position`.
    pub(crate) fn carry_to(&mut self, position: Vec2) {
        if self.attached {
            self.position = Some(position);
        }
    }

    /// Eases an attached companion a `factor` fraction of the way to `target`.
    pub(crate) fn follow(&mut self, target: Vec2, factor: f32) {
        if !self.attached {
            return;
        }
        let Some(current) = self.position else {
            self.position = Some(target);
            return;
        };
        self.position = Some(Vec2::new(
            current.x + (target.x - current.x) * factor,
            current.y + (target.y - current.y) * factor,
        ));
    }
}

/// Progress shared across scenes for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub(crate) struct Progression {
    pub(crate) inventory: Inventory,
    pub(crate) companion: Companion,
}

impl Progression {
    /// Clears every key flag at once. The companion is left alone.
    pub(crate) fn restart_adventure(&mut self) {
        self.inventory.reset_all();
        info!("adventure_restarted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_default_to_false() {
        let inventory = Inventory::default();
        assert!(!inventory.has(KeyFlag::LabKey));
        assert!(!inventory.has(KeyFlag::PlatformKey));
        assert!(inventory.is_empty());
    }

    #[test]
    fn restart_clears_every_flag() {
        let mut progression = Progression::default();
        progression.inventory.grant(KeyFlag::LabKey);
        progression.inventory.grant(KeyFlag::PlatformKey);

        progression.restart_adventure();

        for flag in KeyFlag::ALL {
            assert!(!progression.inventory.has(flag), "{} still set", flag.name());
        }
    }

    #[test]
    fn companion_start_is_set_once() {
        let mut companion = Companion::default();
        companion.ensure_initialized(Vec2::new(90.0, 640.0));
        companion.ensure_initialized(Vec2::new(500.0, 500.0));
        assert_eq!(companion.position(), Some(Vec2::new(90.0, 640.0)));
    }

    #[test]
    fn detached_companion_does_not_follow() {
        let mut companion = Companion::default();
        companion.ensure_initialized(Vec2::new(0.0, 0.0));
        companion.follow(Vec2::new(100.0, 100.0), 0.3);
        assert_eq!(companion.position(), Some(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn carry_only_moves_attached_companion() {
        let mut companion = Companion::default();
        companion.ensure_initialized(Vec2::new(90.0, 640.0));
        companion.carry_to(Vec2::new(1110.0, 1030.0));
        assert_eq!(companion.position(), Some(Vec2::new(90.0, 640.0)));

        companion.attach();
        companion.carry_to(Vec2::new(1110.0, 1030.0));
        assert_eq!(companion.position(), Some(Vec2::new(1110.0, 1030.0)));
    }

    #[test]
    fn attached_companion_eases_toward_target() {
        let mut companion = Companion::default();
        companion.ensure_initialized(Vec2::new(0.0, 0.0));
        companion.attach();

        companion.follow(Vec2::new(100.0, 50.0), 0.3);
        let first = companion.position().expect("position");
        assert!((first.x - 30.0).abs() < 1e-4);
        assert!((first.y - 15.0).abs() < 1e-4);

        companion.follow(Vec2::new(100.0, 50.0), 0.3);
        let second = companion.position().expect("position");
        assert!((second.x - 51.0).abs() < 1e-4);
        assert!(second.x < 100.0);
    }
}
