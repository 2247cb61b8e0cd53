use anyhow::Result;
use log::info;
use room2d::sim::scene::Scene;
use room2d::sim::sweep::{self, SweepConfig};

fn main() -> Result<()> {
    env_logger::init();

    let scene = Scene::demo_room()?;
    let config = SweepConfig::default();
    info!(
        "tracing {} rays up to reflection order {}",
        config.num_rays, config.max_order
    );
    let result = sweep::run(&scene, config);

    println!(
        "{} of {} rays reached the receiver within {} reflections",
        result.received_count(),
        config.num_rays,
        config.max_order
    );
    if let Some(ray) = result.rays.iter().find(|r| r.received()) {
        println!("example path ({} segments):", ray.segments().len());
        for segment in ray.segments() {
            println!("  {segment:.3}");
        }
    }
    Ok(())
}
