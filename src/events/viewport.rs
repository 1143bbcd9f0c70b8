use bevy_ecs::prelude::*;

/// The presentation layer's viewport changed size.
///
/// Updates [`PlayArea`](crate::resources::playarea::PlayArea) and pulls the
/// bird's destination back inside the new bounds.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ViewportResizedEvent {
    pub w: f32,
    pub h: f32,
}
