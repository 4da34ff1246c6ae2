use layer_gallery::prelude::*;
use layer_gallery_examples::init_tracing;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let catalog = catalog();
    catalog.validate()?;

    for category in catalog.list_categories() {
        println!("{category}");
        for example in catalog.list_examples(category)? {
            let d = catalog.get_descriptor(category, example)?;
            let data = match (d.data.label(), d.data.len_hint()) {
                (Some(label), _) => format!("deferred '{label}'"),
                (None, Some(n)) => format!("{n} records"),
                (None, None) => "unknown size".to_owned(),
            };
            println!(
                "  {example:<28} {:<18} {data}{}",
                d.layer.name(),
                if d.has_randomized_props() {
                    " (randomized)"
                } else {
                    ""
                }
            );
            for (name, control) in &d.controls {
                println!(
                    "      control {name}: {}..={} step {}",
                    control.min, control.max, control.step
                );
            }
        }
    }

    let loaders = default_loaders();
    let formats: Vec<_> = loaders.formats().iter().map(|f| f.name()).collect();
    println!("loaders: {}", formats.join(", "));

    Ok(())
}
