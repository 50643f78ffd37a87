use behavior_tick::{load, parse_file, Action, Outcome, Registry};

#[derive(Debug)]
struct World {
    position: f64,
}

const TREE_SOURCE: &str = r#"
# One patrol leg: walk to the far post, report, then walk back.
tree main = Sequence {
    MoveTo (id = "outbound", target = 3.0)
    Report (message = "reached the far post")
    MoveTo (id = "inbound", target = 0.0)
    Report (message = "back home")
}
"#;

fn main() -> anyhow::Result<()> {
    let mut registry: Registry<World> = Registry::default();
    registry.register(
        "MoveTo",
        Action::stateful_with_init(
            |_world: &mut World, _memory, node| {
                if let Some(target) = node.get("target").and_then(|v| v.as_f64()) {
                    println!("heading for {}", target);
                }
            },
            |world: &mut World, _memory, node| {
                let target = node.get("target").and_then(|v| v.as_f64()).unwrap_or(0.0);
                let diff = target - world.position;
                if diff.abs() < 0.25 {
                    world.position = target;
                    Outcome::Success
                } else {
                    world.position += diff.signum() * 0.5;
                    Outcome::Running
                }
            },
        ),
    )?;
    registry.register(
        "Report",
        Action::stateful(|_world: &mut World, _memory, node| {
            if let Some(message) = node.get("message").and_then(|v| v.as_str()) {
                println!("report: {}", message);
            }
            true
        }),
    )?;

    let (_, tree_source) =
        parse_file(TREE_SOURCE).map_err(|e| anyhow::anyhow!("parse error: {}", e))?;
    let tree = load(&tree_source)?;

    let mut world = World { position: 0.0 };
    let mut instance = tree.create_instance(&registry);

    loop {
        let outcome = tree.update(&mut world, &mut instance, &registry)?;
        println!("tick: {:?} at {:.1}", outcome, world.position);
        if outcome != Outcome::Running {
            break;
        }
    }

    Ok(())
}
