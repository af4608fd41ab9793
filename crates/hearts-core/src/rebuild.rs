//! Coalescing of target rebuild requests.
//!
//! A rebuild may have to wait for an image decode. Requests issued while one
//! is waiting are folded into it; only the newest ticket applies the
//! combined request.

/// What a rebuild should do once the new targets are in.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RebuildRequest {
    /// Scatter every particle anew at rest.
    pub reset_positions: bool,
    /// Centre ripple magnitude to spawn after the rebuild.
    pub ripple: Option<f32>,
}

impl RebuildRequest {
    pub fn new(reset_positions: bool, ripple: Option<f32>) -> Self {
        Self {
            reset_positions,
            ripple,
        }
    }

    /// Union of two requests: reset if either resets, the stronger ripple.
    pub fn merge(self, other: Self) -> Self {
        let ripple = match (self.ripple, other.ripple) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        Self {
            reset_positions: self.reset_positions || other.reset_positions,
            ripple,
        }
    }
}

/// Outstanding rebuild work plus a ticket counter.
#[derive(Clone, Debug, Default)]
pub struct RebuildQueue {
    generation: u64,
    pending: Option<RebuildRequest>,
}

impl RebuildQueue {
    /// Record `request`, merged into whatever is still pending, and return
    /// the ticket that may apply it.
    pub fn submit(&mut self, request: RebuildRequest) -> u64 {
        self.generation += 1;
        self.pending = Some(match self.pending {
            Some(pending) => pending.merge(request),
            None => request,
        });
        self.generation
    }

    /// The merged request, if `ticket` is still the newest one. Older
    /// tickets get `None` and leave the pending work in place.
    pub fn take(&mut self, ticket: u64) -> Option<RebuildRequest> {
        if ticket != self.generation {
            return None;
        }
        self.pending.take()
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
