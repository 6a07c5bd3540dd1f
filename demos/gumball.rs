//! Gumball Machine
//!
//! The classic four-state vending machine. Handlers are stateless; the
//! gumball inventory travels in the per-call args, so the same handler set
//! could serve any number of machines.
//!
//! Run with: cargo run --example gumball

use std::cell::Cell;
use std::sync::Arc;
use switchyard::dispatch::{
    Context, DispatchError, DispatchOutcome, DispatchRegistry, FallbackPolicy, StateHandler,
    TransitionScope,
};
use switchyard::{event_kind, state_id};

state_id! {
    enum Machine {
        NoQuarter,
        HasQuarter,
        Sold,
        SoldOut,
    }
}

event_kind! {
    enum Action {
        InsertQuarter,
        EjectQuarter,
        TurnCrank,
        Dispense,
    }
}

struct Inventory {
    remaining: Cell<u32>,
}

struct NoQuarter;

impl StateHandler<Machine, Action, Inventory> for NoQuarter {
    fn handle(
        &self,
        event: &Action,
        scope: &mut TransitionScope<'_, Machine>,
        _inv: &Inventory,
    ) -> Result<DispatchOutcome, DispatchError> {
        match event {
            Action::InsertQuarter => {
                println!("you inserted a quarter");
                scope.transition_to(Machine::HasQuarter)?;
                Ok(DispatchOutcome::Handled)
            }
            _ => Ok(DispatchOutcome::Unhandled),
        }
    }
}

struct HasQuarter;

impl StateHandler<Machine, Action, Inventory> for HasQuarter {
    fn handle(
        &self,
        event: &Action,
        scope: &mut TransitionScope<'_, Machine>,
        _inv: &Inventory,
    ) -> Result<DispatchOutcome, DispatchError> {
        match event {
            Action::InsertQuarter => {
                println!("you can't insert another quarter");
            }
            Action::EjectQuarter => {
                println!("quarter returned");
                scope.transition_to(Machine::NoQuarter)?;
            }
            Action::TurnCrank => {
                println!("you turned");
                scope.transition_to(Machine::Sold)?;
            }
            Action::Dispense => {
                println!("no gumball dispensed");
            }
        }
        Ok(DispatchOutcome::Handled)
    }
}

struct Sold;

impl StateHandler<Machine, Action, Inventory> for Sold {
    fn handle(
        &self,
        event: &Action,
        scope: &mut TransitionScope<'_, Machine>,
        inv: &Inventory,
    ) -> Result<DispatchOutcome, DispatchError> {
        match event {
            Action::InsertQuarter => {
                println!("please wait, you are already getting a gumball");
            }
            Action::EjectQuarter => {
                println!("you already turned the crank");
            }
            Action::TurnCrank => {
                println!("you turned twice");
            }
            Action::Dispense => {
                println!("a gumball comes rolling out the slot");
                let left = inv.remaining.get().saturating_sub(1);
                inv.remaining.set(left);
                if left > 0 {
                    scope.transition_to(Machine::NoQuarter)?;
                } else {
                    scope.transition_to(Machine::SoldOut)?;
                }
            }
        }
        Ok(DispatchOutcome::Handled)
    }
}

struct SoldOut;

impl StateHandler<Machine, Action, Inventory> for SoldOut {
    fn handle(
        &self,
        event: &Action,
        _scope: &mut TransitionScope<'_, Machine>,
        _inv: &Inventory,
    ) -> Result<DispatchOutcome, DispatchError> {
        match event {
            Action::InsertQuarter => {
                println!("it is sold out");
                Ok(DispatchOutcome::Handled)
            }
            _ => Ok(DispatchOutcome::Unhandled),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Gumball Machine ===\n");

    let mut registry: DispatchRegistry<Machine, Action, Inventory> = DispatchRegistry::new();
    registry.register(Machine::NoQuarter, Arc::new(NoQuarter))?;
    registry.register(Machine::HasQuarter, Arc::new(HasQuarter))?;
    registry.register(Machine::Sold, Arc::new(Sold))?;
    registry.register(Machine::SoldOut, Arc::new(SoldOut))?;

    let inventory = Inventory {
        remaining: Cell::new(3),
    };

    // dropping a coin in an empty machine should stay quiet, so the
    // stay-put contract fits here
    let mut machine =
        Context::with_policy(Machine::NoQuarter, registry, FallbackPolicy::Ignore)?;

    for _ in 0..4 {
        machine.dispatch(Action::InsertQuarter, &inventory)?;
        machine.dispatch(Action::TurnCrank, &inventory)?;
        machine.dispatch(Action::Dispense, &inventory)?;
    }

    println!("\nFinal state: {:?}", machine.current());
    println!("Gumballs left: {}", inventory.remaining.get());
    println!(
        "Applied transitions: {}",
        machine.history().records().len()
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
