use bevy::prelude::*;

/// The two room dressings the scene can switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnvironmentKind {
    #[default]
    Office,
    Cafe,
}

impl EnvironmentKind {
    pub fn toggled(self) -> Self {
        match self {
            EnvironmentKind::Office => EnvironmentKind::Cafe,
            EnvironmentKind::Cafe => EnvironmentKind::Office,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EnvironmentKind::Office => "Office",
            EnvironmentKind::Cafe => "Cafe",
        }
    }
}

/// Root of the props belonging to one environment.
#[derive(Component, Debug, Clone, Copy)]
pub struct EnvironmentRoot(pub EnvironmentKind);

/// Light that is only enabled while its environment is active.
#[derive(Component, Debug, Clone, Copy)]
pub struct EnvironmentLight(pub EnvironmentKind);

/// Which environment is active. Object and light visibility follow this flag.
#[derive(Resource, Debug, Default)]
pub struct EnvironmentState {
    active: EnvironmentKind,
}

impl EnvironmentState {
    pub fn active(&self) -> EnvironmentKind {
        self.active
    }

    pub fn is_active(&self, kind: EnvironmentKind) -> bool {
        self.active == kind
    }

    pub fn is_in_office(&self) -> bool {
        self.active == EnvironmentKind::Office
    }

    pub fn current_environment_name(&self) -> &'static str {
        self.active.name()
    }

    /// Label for the switch button, naming the environment it leads to.
    pub fn switch_label(&self) -> String {
        let target = if self.is_in_office() {
            EnvironmentKind::Cafe
        } else {
            EnvironmentKind::Office
        };
        format!("Switch to {}", target.name())
    }

    pub fn status_label(&self) -> String {
        format!("Environment: {}", self.active.name())
    }

    pub fn switch(&mut self) -> EnvironmentKind {
        self.active = self.active.toggled();
        self.active
    }

    pub fn visibility_for(&self, kind: EnvironmentKind) -> Visibility {
        if self.is_active(kind) {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        }
    }
}

/// Request to toggle between office and cafe.
#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchEnvironment;
