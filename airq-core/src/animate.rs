use std::fmt::Debug;

/// Surfaces that can receive an entrance animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationTarget {
    HeroCard,
    MetricsCard,
    /// Backdrop and panel together, on modal open.
    Modal,
}

/// An engine that can run an entrance animation on a target.
pub trait Animator: Send + Sync + Debug {
    fn animate(&self, target: AnimationTarget) -> anyhow::Result<()>;
}

/// Best-effort wrapper around an optional [`Animator`].
///
/// The "is the capability available" check lives here and only here. A
/// missing engine or a failing animation is logged and swallowed; callers
/// never observe either.
#[derive(Debug, Default)]
pub struct AnimationTrigger {
    animator: Option<Box<dyn Animator>>,
}

impl AnimationTrigger {
    pub fn new(animator: Box<dyn Animator>) -> Self {
        Self { animator: Some(animator) }
    }

    /// No animation engine loaded; every trigger is a logged no-op.
    pub fn unavailable() -> Self {
        Self { animator: None }
    }

    pub fn animate(&self, target: AnimationTarget) {
        match &self.animator {
            Some(animator) => {
                if let Err(err) = animator.animate(target) {
                    tracing::warn!(?target, error = %err, "animation failed, continuing without it");
                }
            }
            None => {
                tracing::debug!(?target, "animation engine unavailable, skipping");
            }
        }
    }
}
