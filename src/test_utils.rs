pub const BLOCKSWORLD_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/blocksworld.txt"
));

pub const GRIPPER_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/gripper.txt"
));

pub const UNSOLVABLE_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/unsolvable.txt"
));

/// A domain where opening a door requires it to be closed, exercising
/// negative preconditions and negative goals.
pub const DOORS_TEXT: &str = r#"
Symbols: D1,D2
Initial conditions: IsOpen(D1)
Goal conditions: IsOpen(D2), !IsOpen(D1)
Actions:
    OpenDoor(d)
    Preconditions: !IsOpen(d)
    Effects: IsOpen(d)

    CloseDoor(d)
    Preconditions: IsOpen(d)
    Effects: !IsOpen(d)
"#;
