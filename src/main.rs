//! Headless demo: builds a small scene, simulates a drag, edits the
//! selection through the property panel, and exports a PNG.

use anyhow::Context;
use scenekit::{
    apply_edit, init_logging, inspect, render_to_image, FieldRegistry, InteractionController,
    Point, Scene, ShapeRegistry, Tool,
};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_logging()?;
    info!(version = scenekit::VERSION, built = scenekit::BUILD_DATE, "scenekit demo");

    let registry = ShapeRegistry::with_builtin_kinds();
    let fields = FieldRegistry::with_builtin_fields();
    let mut scene = Scene::new();
    let mut input = InteractionController::new();

    // Place one shape of each built-in kind.
    for (tag, position) in [
        ("rect", Point::new(160.0, 140.0)),
        ("ellipse", Point::new(420.0, 200.0)),
        ("line", Point::new(80.0, 320.0)),
    ] {
        input.set_tool(Tool::Place(tag.to_string()));
        input.pointer_down(&mut scene, &registry, position)?;
        input.pointer_up();
    }

    // Drag the ellipse a little.
    input.pointer_down(&mut scene, &registry, Point::new(420.0, 200.0))?;
    input.pointer_move(&mut scene, Point::new(455.0, 225.0));
    input.pointer_up();

    if let Some(id) = scene.selected_id() {
        if let Some(shape) = scene.get_mut(id) {
            apply_edit(shape, &fields, "fill", "#9b59b6")
                .context("editing the selected shape's fill")?;
        }
        if let Some(shape) = scene.get(id) {
            let form = inspect(shape, &fields);
            println!("{}", serde_json::to_string_pretty(&form)?);
        }
    }

    let img = render_to_image(&scene, 640, 480);
    img.save("scene.png").context("writing scene.png")?;
    info!(shapes = scene.len(), "rendered scene.png");

    Ok(())
}
