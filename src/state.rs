use bevy::prelude::*;

/// Whether the scene is being edited or simulated.
///
/// Grid snapping only moves entities while `Editing`; gizmos are drawn in
/// every state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, States)]
pub enum SimulationState {
    /// Scene is being edited, snapping active (default state)
    #[default]
    Editing,
    /// Game logic running, entities left where they are
    Playing,
    /// Simulation halted mid-play, still not snapping
    Paused,
}

impl SimulationState {
    pub fn is_editing(&self) -> bool {
        matches!(self, SimulationState::Editing)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SimulationState::Editing => "Editing",
            SimulationState::Playing => "Playing",
            SimulationState::Paused => "Paused",
        }
    }
}

pub struct SimulationStatePlugin;

impl Plugin for SimulationStatePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<SimulationState>()
            .add_systems(Update, handle_simulation_input)
            .add_systems(OnEnter(SimulationState::Editing), || {
                info!("Simulation: EDITING (grid snapping active)")
            })
            .add_systems(OnEnter(SimulationState::Playing), || {
                info!("Simulation: PLAYING")
            })
            .add_systems(OnEnter(SimulationState::Paused), || {
                info!("Simulation: PAUSED")
            });
    }
}

/// F5 plays or resumes, F6 pauses, F7 stops back to editing
fn handle_simulation_input(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    sim_state: Res<State<SimulationState>>,
    mut next_state: ResMut<NextState<SimulationState>>,
) {
    let Some(keyboard) = keyboard else {
        return;
    };

    if keyboard.just_pressed(KeyCode::F5) && *sim_state.get() != SimulationState::Playing {
        next_state.set(SimulationState::Playing);
    }

    if keyboard.just_pressed(KeyCode::F6) && *sim_state.get() == SimulationState::Playing {
        next_state.set(SimulationState::Paused);
    }

    if keyboard.just_pressed(KeyCode::F7) && *sim_state.get() != SimulationState::Editing {
        next_state.set(SimulationState::Editing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    fn state_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .init_resource::<ButtonInput<KeyCode>>()
            .add_plugins(SimulationStatePlugin);
        app.update();
        app
    }

    /// Press `key` for one frame, then let the state transition apply
    fn tap(app: &mut App, key: KeyCode) {
        app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(key);
        app.update();
        let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        input.release(key);
        input.clear();
        app.update();
    }

    fn current(app: &App) -> SimulationState {
        *app.world().resource::<State<SimulationState>>().get()
    }

    #[test]
    fn starts_editing() {
        let app = state_app();
        assert_eq!(current(&app), SimulationState::Editing);
    }

    #[test]
    fn f5_plays_from_editing() {
        let mut app = state_app();
        tap(&mut app, KeyCode::F5);
        assert_eq!(current(&app), SimulationState::Playing);
    }

    #[test]
    fn f6_only_pauses_while_playing() {
        let mut app = state_app();
        tap(&mut app, KeyCode::F6);
        assert_eq!(current(&app), SimulationState::Editing);

        tap(&mut app, KeyCode::F5);
        tap(&mut app, KeyCode::F6);
        assert_eq!(current(&app), SimulationState::Paused);
    }

    #[test]
    fn f5_resumes_from_paused() {
        let mut app = state_app();
        tap(&mut app, KeyCode::F5);
        tap(&mut app, KeyCode::F6);
        tap(&mut app, KeyCode::F5);
        assert_eq!(current(&app), SimulationState::Playing);
    }

    #[test]
    fn f7_stops_back_to_editing() {
        let mut app = state_app();
        tap(&mut app, KeyCode::F7);
        assert_eq!(current(&app), SimulationState::Editing);

        tap(&mut app, KeyCode::F5);
        tap(&mut app, KeyCode::F6);
        tap(&mut app, KeyCode::F7);
        assert_eq!(current(&app), SimulationState::Editing);

        tap(&mut app, KeyCode::F5);
        tap(&mut app, KeyCode::F7);
        assert_eq!(current(&app), SimulationState::Editing);
    }
}
