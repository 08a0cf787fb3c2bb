//! Hook registration table and call dispatch
//!
//! Host call sites route intercepted operations through [`HookRegistry::call`],
//! handing over the original implementation as a closure:
//!
//! 1. The before-hook (at most one per operation) runs first and may return
//!    `HookResult::Skip(output)`, in which case the original never runs and
//!    `output` stands in for its result.
//! 2. Otherwise the original runs.
//! 3. After-hooks run in registration order and may adjust the result.
//!
//! The table is filled while the module installs itself, then sealed. After
//! that it is read-only and safe to share between host threads.
//!
//! A panicking hook never unwinds into the host: the panic is logged and the
//! call continues as if the hook had not been registered.

use std::any::Any;
use std::marker::PhantomData;
use std::panic::{self, AssertUnwindSafe};

use hashbrown::HashMap;

use super::error::HookError;
use super::operation::{Operation, OperationId};

/// What a before-hook wants the dispatcher to do with the original.
#[derive(Debug, Clone, PartialEq)]
pub enum HookResult<T> {
    /// Run the original implementation
    Continue,
    /// Do not run the original; use this value as its result
    Skip(T),
}

impl<T> HookResult<T> {
    pub fn skips_original(&self) -> bool {
        matches!(self, HookResult::Skip(_))
    }
}

pub type BeforeHook<Op> = Box<
    dyn Fn(
            &mut <Op as Operation>::Receiver,
            &<Op as Operation>::Args,
        ) -> HookResult<<Op as Operation>::Output>
        + Send
        + Sync,
>;

pub type AfterHook<Op> = Box<
    dyn Fn(&mut <Op as Operation>::Receiver, &<Op as Operation>::Args, &mut <Op as Operation>::Output)
        + Send
        + Sync,
>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HookKind {
    Before,
    After,
}

/// One entry of the registration table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HookRegistration {
    pub operation: OperationId,
    pub kind: HookKind,
}

// ─────────────────────────────────────────────────────────────────────────────
// Typed Slots
// ─────────────────────────────────────────────────────────────────────────────

struct HookSlot<Op: Operation> {
    before: Option<BeforeHook<Op>>,
    after: Vec<AfterHook<Op>>,
    _op: PhantomData<fn() -> Op>,
}

impl<Op: Operation> HookSlot<Op> {
    fn new() -> Self {
        Self {
            before: None,
            after: Vec::new(),
            _op: PhantomData,
        }
    }

    fn run_before(&self, receiver: &mut Op::Receiver, args: &Op::Args) -> HookResult<Op::Output> {
        let Some(hook) = &self.before else {
            return HookResult::Continue;
        };
        match panic::catch_unwind(AssertUnwindSafe(|| hook(receiver, args))) {
            Ok(result) => result,
            Err(payload) => {
                tracing::error!(
                    operation = %Op::ID,
                    panic = panic_message(payload.as_ref()),
                    "Before-hook panicked; running original"
                );
                HookResult::Continue
            }
        }
    }

    fn run_after(&self, receiver: &mut Op::Receiver, args: &Op::Args, output: &mut Op::Output) {
        for hook in &self.after {
            if let Err(payload) =
                panic::catch_unwind(AssertUnwindSafe(|| hook(receiver, args, output)))
            {
                tracing::error!(
                    operation = %Op::ID,
                    panic = panic_message(payload.as_ref()),
                    "After-hook panicked"
                );
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        *msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "unknown panic"
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Registry
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct HookRegistry {
    slots: HashMap<OperationId, Box<dyn Any + Send + Sync>>,
    registrations: Vec<HookRegistration>,
    sealed: bool,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the before-hook for `Op`. Only one is allowed per operation.
    pub fn register_before<Op: Operation>(
        &mut self,
        hook: impl Fn(&mut Op::Receiver, &Op::Args) -> HookResult<Op::Output> + Send + Sync + 'static,
    ) -> Result<(), HookError> {
        let slot = self.slot_mut::<Op>()?;
        if slot.before.is_some() {
            return Err(HookError::DuplicateBefore(Op::ID));
        }
        slot.before = Some(Box::new(hook));
        self.record(Op::ID, HookKind::Before);
        Ok(())
    }

    /// Register an after-hook for `Op`. After-hooks chain in registration order.
    pub fn register_after<Op: Operation>(
        &mut self,
        hook: impl Fn(&mut Op::Receiver, &Op::Args, &mut Op::Output) + Send + Sync + 'static,
    ) -> Result<(), HookError> {
        let slot = self.slot_mut::<Op>()?;
        slot.after.push(Box::new(hook));
        self.record(Op::ID, HookKind::After);
        Ok(())
    }

    /// Freeze the table. Later registrations fail with [`HookError::Sealed`].
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Registered hooks, ordered by operation then kind
    pub fn registrations(&self) -> Vec<HookRegistration> {
        let mut regs = self.registrations.clone();
        regs.sort();
        regs
    }

    pub fn has_before(&self, id: OperationId) -> bool {
        self.registrations
            .iter()
            .any(|r| r.operation == id && r.kind == HookKind::Before)
    }

    /// Invoke `Op` through its hooks. `original` is the host's implementation.
    pub fn call<Op: Operation>(
        &self,
        receiver: &mut Op::Receiver,
        args: &Op::Args,
        original: impl FnOnce(&mut Op::Receiver, &Op::Args) -> Op::Output,
    ) -> Op::Output {
        let Some(slot) = self.slot::<Op>() else {
            return original(receiver, args);
        };

        let before = slot.run_before(receiver, args);
        if before.skips_original() {
            tracing::trace!(operation = %Op::ID, "Original skipped by before-hook");
        }
        let mut output = match before {
            HookResult::Skip(output) => output,
            HookResult::Continue => original(receiver, args),
        };
        slot.run_after(receiver, args, &mut output);
        output
    }

    fn slot<Op: Operation>(&self) -> Option<&HookSlot<Op>> {
        self.slots
            .get(&Op::ID)
            .and_then(|slot| slot.downcast_ref::<HookSlot<Op>>())
    }

    fn slot_mut<Op: Operation>(&mut self) -> Result<&mut HookSlot<Op>, HookError> {
        if self.sealed {
            return Err(HookError::Sealed(Op::ID));
        }
        self.slots
            .entry(Op::ID)
            .or_insert_with(|| Box::new(HookSlot::<Op>::new()))
            .downcast_mut::<HookSlot<Op>>()
            .ok_or(HookError::ShapeMismatch(Op::ID))
    }

    fn record(&mut self, operation: OperationId, kind: HookKind) {
        self.registrations.push(HookRegistration { operation, kind });
    }
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookRegistry")
            .field("registrations", &self.registrations)
            .field("sealed", &self.sealed)
            .finish()
    }
}
