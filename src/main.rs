use anyhow::Result;
use glam::Vec2;
use log::info;

use rusted_controls::engine::control::{CharacterController, ControlHandler};
use rusted_controls::engine::game_loop::{GameLoop, FIXED_TIMESTEP_DURATION};
use rusted_controls::game::characters::handlers::{
    AttackHandler, FreezeHandler, LocomotionHandler, WallJumpHandler,
};
use rusted_controls::game::characters::{
    AxisState, Character, FrameInput, PlayerStateDispatcher, BASE_STATS,
};

/// Walls sit at -ARENA_HALF_WIDTH and ARENA_HALF_WIDTH
const ARENA_HALF_WIDTH: f32 = 6.0;

/// Number of rendered frames the demo runs for
const DEMO_FRAMES: u64 = 240;

/// Fixed update at which the character gets hit and frozen
const HIT_STEP: u64 = 150;

/// Scripted player input for a fixed update
fn scripted_input(step: u64) -> FrameInput {
    let axis = match step {
        0..=59 => AxisState::new(1.0, 0.0),
        60..=109 => AxisState::new(-1.0, 0.0),
        _ => AxisState::default(),
    };

    FrameInput {
        axis,
        jump_pressed: step == 30 || (50..=58).contains(&step),
        attack_pressed: step == 120 || step == 145,
    }
}

/// Host reactions to input and game events: push the handlers that want control
fn push_requested_handlers(
    controller: &mut CharacterController<Character>,
    step: u64,
) -> Result<()> {
    let character = controller.context();
    let input = character.input;

    let mut requested: Vec<Box<dyn ControlHandler<Character>>> = Vec::new();
    if input.jump_pressed && character.is_airborne() && character.wall_contact.is_some() {
        requested.push(Box::new(WallJumpHandler::for_character(character)));
    }
    if input.attack_pressed && !character.attacking {
        requested.push(Box::new(AttackHandler::for_character(character)));
    }

    for handler in requested {
        controller.push_control_handler(handler);
    }

    if step == HIT_STEP {
        let freeze = FreezeHandler::for_character(controller.context());

        // A hit mid-swing replaces the attack, otherwise the freeze goes on top
        let attacking = controller
            .active_control_handler()
            .is_some_and(|handler| handler.name() == "attack");
        if attacking {
            info!("step {}: hit during attack, exchanging it for freeze", step);
            controller.exchange_active_control_handler(Box::new(freeze))?;
        } else {
            controller.push_control_handler(Box::new(freeze));
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Rusted Controls demo...");

    let hero = Character::new(0, "hero", BASE_STATS, Vec2::ZERO);
    let mut controller = CharacterController::new(hero.name.clone(), hero);
    controller.push_control_handler(Box::new(LocomotionHandler::new()));

    let mut dispatcher = PlayerStateDispatcher::with_standard_controllers();
    let mut game_loop = GameLoop::new();
    let mut step = 0;

    for _ in 0..DEMO_FRAMES {
        let updates = game_loop.advance(FIXED_TIMESTEP_DURATION);

        for _ in 0..updates {
            let dt = game_loop.fixed_timestep();
            controller
                .context_mut()
                .begin_frame(scripted_input(step), dt);

            push_requested_handlers(&mut controller, step)?;
            controller.update()?;

            let character = controller.context_mut();
            character.integrate(ARENA_HALF_WIDTH);
            dispatcher.update_player_state(character);
            character.animation.update(dt);
            character.clear_input();

            if step % 10 == 0 {
                let character = controller.context();
                info!(
                    "step {:>3}: handler {:<10} clip {:<10} pos ({:>5.2}, {:>5.2}) stack {:?}",
                    step,
                    controller
                        .active_control_handler()
                        .map(|handler| handler.name())
                        .unwrap_or("-"),
                    character.animation.current_clip(),
                    character.position.x,
                    character.position.y,
                    controller.handler_names()
                );
            }

            step += 1;
        }
    }

    info!(
        "Demo finished after {} frames / {} updates",
        game_loop.frame_count(),
        game_loop.update_count()
    );

    // Back to a clean slate before shutting down
    controller.reset_control_handlers(None);

    Ok(())
}
