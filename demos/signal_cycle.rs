//! Signal Cycle Dispatch
//!
//! A three-state machine driven by a fixed input script. State A handles
//! every input, B and C only some; unsupported inputs surface as typed
//! errors the harness turns into an "error" line.
//!
//! Run with: cargo run --example signal_cycle

use std::sync::Arc;
use switchyard::dispatch::{
    Context, DispatchError, DispatchOutcome, DispatchRegistry, StateHandler, TransitionScope,
};
use switchyard::{event_kind, state_id};

state_id! {
    enum Signal {
        A,
        B,
        C,
    }
}

event_kind! {
    enum Input {
        On,
        Off,
        Ack,
    }
}

struct StateA;

impl StateHandler<Signal, Input> for StateA {
    fn handle(
        &self,
        event: &Input,
        scope: &mut TransitionScope<'_, Signal>,
        _args: &(),
    ) -> Result<DispatchOutcome, DispatchError> {
        match event {
            Input::On => {
                println!("A + on = C");
                scope.transition_to(Signal::C)?;
            }
            Input::Off => {
                println!("A + off = B");
                scope.transition_to(Signal::B)?;
            }
            Input::Ack => {
                println!("A + ack = A");
                scope.transition_to(Signal::A)?;
            }
        }
        Ok(DispatchOutcome::Handled)
    }
}

struct StateB;

impl StateHandler<Signal, Input> for StateB {
    fn handle(
        &self,
        event: &Input,
        scope: &mut TransitionScope<'_, Signal>,
        _args: &(),
    ) -> Result<DispatchOutcome, DispatchError> {
        match event {
            Input::On => {
                println!("B + on = A");
                scope.transition_to(Signal::A)?;
            }
            Input::Off => {
                println!("B + off = C");
                scope.transition_to(Signal::C)?;
            }
            Input::Ack => return Ok(DispatchOutcome::Unhandled),
        }
        Ok(DispatchOutcome::Handled)
    }
}

struct StateC;

impl StateHandler<Signal, Input> for StateC {
    fn handle(
        &self,
        event: &Input,
        scope: &mut TransitionScope<'_, Signal>,
        _args: &(),
    ) -> Result<DispatchOutcome, DispatchError> {
        match event {
            Input::On => {
                println!("C + on = B");
                scope.transition_to(Signal::B)?;
                Ok(DispatchOutcome::Handled)
            }
            _ => Ok(DispatchOutcome::Unhandled),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Signal Cycle Dispatch ===\n");

    let mut registry: DispatchRegistry<Signal, Input> = DispatchRegistry::new();
    registry.register(Signal::A, Arc::new(StateA))?;
    registry.register(Signal::B, Arc::new(StateB))?;
    registry.register(Signal::C, Arc::new(StateC))?;

    let mut machine = Context::new(Signal::A, registry)?;

    let script = [
        Input::Ack,
        Input::Off,
        Input::Ack,
        Input::Off,
        Input::On,
        Input::Ack,
        Input::On,
        Input::On,
    ];

    for input in script {
        match machine.dispatch(input, &()) {
            Ok(_) => {}
            Err(DispatchError::UnsupportedEvent { .. }) => println!("error"),
            Err(other) => return Err(other.into()),
        }
    }

    println!("\nFinal state: {:?}", machine.current());
    println!(
        "Applied transitions: {}",
        machine.history().records().len()
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
