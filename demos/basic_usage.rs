// ============================================================================
// Basic Usage Example
// ============================================================================

use calc_engine::prelude::*;
use std::sync::Arc;

fn show(engine: &CalculatorEngine) {
    let snapshot = engine.get_snapshot();
    println!("  [{:>12}] {}", snapshot.secondary, snapshot.display);
}

fn run(engine: &mut CalculatorEngine, keys: &[&str]) {
    for key in keys {
        match key.parse::<Key>() {
            Ok(key) => engine.press(key),
            Err(err) => println!("  skipped: {}", err),
        }
    }
    show(engine);
}

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Calculator Engine Example ===\n");

    let mut engine = match CalculatorEngineBuilder::desktop().build(Arc::new(LoggingEventHandler)) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("invalid configuration: {}", err);
            return;
        },
    };

    println!("Chaining: 10 + 2 - 3 =");
    run(&mut engine, &["1", "0", "+", "2", "-"]);
    run(&mut engine, &["3", "="]);

    println!("\nRepeat equals: 5 + 2 = = =");
    engine.press_clear();
    run(&mut engine, &["5", "+", "2", "=", "=", "="]);

    println!("\nExact decimals: 0.1 + 0.2 =");
    engine.press_clear();
    run(&mut engine, &[".", "1", "+", ".", "2", "="]);

    println!("\nDivision by zero, then recovery");
    engine.press_clear();
    run(&mut engine, &["5", "÷", "0", "="]);
    run(&mut engine, &["9"]);

    // A narrow display rounds results to fit
    println!("\n=== Pocket Display ===");
    let mut pocket = match CalculatorEngineBuilder::pocket().build(Arc::new(NoOpEventHandler)) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("invalid configuration: {}", err);
            return;
        },
    };
    run(&mut pocket, &["2", "÷", "3", "="]);
    run(&mut pocket, &["×", "9", "9", "9", "9", "9", "9", "9", "9", "9", "9", "9", "="]);
    println!("  error: {:?}", pocket.error_kind());

    println!("\n=== Compact Rendering ===");
    engine.press_clear();
    run(&mut engine, &["1", "÷", "7", "="]);
    let config = engine.get_config();
    let sentinels = [config.error_token.as_str(), config.overflow_token.as_str()];
    println!("  compact: {}", compact_display(&engine.get_display(), 12, &sentinels));
}
