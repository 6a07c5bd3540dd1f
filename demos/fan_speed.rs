//! Fan Speed Pull Chain
//!
//! A cyclic machine built entirely from declarative tables: each pull of
//! the chain steps the fan Off -> Low -> Medium -> High and back to Off.
//!
//! Run with: cargo run --example fan_speed

use std::sync::Arc;
use switchyard::dispatch::{Context, DispatchRegistry, TableHandler};
use switchyard::{event_kind, state_id};

state_id! {
    enum Speed {
        Off,
        Low,
        Medium,
        High,
    }
}

event_kind! {
    enum Chain {
        Pull,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Fan Speed Pull Chain ===\n");

    let mut registry: DispatchRegistry<Speed, Chain> = DispatchRegistry::new();
    registry.register(
        Speed::Off,
        Arc::new(TableHandler::new().on(Chain::Pull, Speed::Low)),
    )?;
    registry.register(
        Speed::Low,
        Arc::new(TableHandler::new().on(Chain::Pull, Speed::Medium)),
    )?;
    registry.register(
        Speed::Medium,
        Arc::new(TableHandler::new().on(Chain::Pull, Speed::High)),
    )?;
    registry.register(
        Speed::High,
        Arc::new(TableHandler::new().on(Chain::Pull, Speed::Off)),
    )?;

    let mut fan = Context::new(Speed::Off, registry)?;

    for _ in 0..6 {
        fan.dispatch(Chain::Pull, &())?;
        match fan.current() {
            Speed::Off => println!("turning off"),
            Speed::Low => println!("low speed"),
            Speed::Medium => println!("medium speed"),
            Speed::High => println!("high speed"),
        }
    }

    println!("\nThis is a cyclic machine - the sequence repeats:");
    println!("  Off -> Low -> Medium -> High -> Off -> ...");

    println!("\n=== Example Complete ===");
    Ok(())
}
