//! Experimental aggregation layer examples, including the large point-cloud benchmarks.
use crate::builtin::position_of;
use crate::catalog::{DataSource, ExampleDescriptor, LayerKind, Record};
use crate::samples;

fn grid(layer: LayerKind, data: DataSource, id: &str) -> ExampleDescriptor {
    ExampleDescriptor::new(layer, data)
        .with_id(id)
        .with_constant("cellSize", 200.0)
        .with_constant("opacity", 1.0)
        .with_constant("extruded", true)
        .with_constant("pickable", false)
        .with_accessor("getPosition", position_of)
}

fn gpu_grid_perf(label: &str, producer: fn() -> Vec<Record>) -> ExampleDescriptor {
    grid(
        LayerKind::GpuGrid,
        DataSource::deferred(format!("points-{label}"), producer),
        &format!("gpuGridLayerPerf-{label}"),
    )
}

pub(crate) fn examples() -> Vec<(&'static str, ExampleDescriptor)> {
    vec![
        (
            "GPUGridLayer",
            grid(
                LayerKind::GpuGrid,
                DataSource::Static(samples::points()),
                "gpu-grid-layer",
            ),
        ),
        (
            "NewGridLayer",
            grid(
                LayerKind::NewGrid,
                DataSource::Static(samples::points()),
                "gpu-grid-layer",
            ),
        ),
        ("GPUGridLayer (1M)", gpu_grid_perf("1M", samples::points_1m)),
        ("GPUGridLayer (5M)", gpu_grid_perf("5M", samples::points_5m)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perf_examples_defer_their_data() {
        let examples = examples();
        let (_, one_million) = &examples[2];
        assert!(one_million.data.is_deferred());
        assert_eq!(one_million.data.label(), Some("points-1M"));
        assert_eq!(one_million.id(), Some("gpuGridLayerPerf-1M"));

        let (_, five_million) = &examples[3];
        assert_eq!(five_million.id(), Some("gpuGridLayerPerf-5M"));
    }

    #[test]
    fn grid_examples_share_the_point_collection() {
        let examples = examples();
        let gpu = examples[0].1.data.resolve();
        let new = examples[1].1.data.resolve();
        assert!(std::sync::Arc::ptr_eq(&gpu, &new));
        assert_eq!(examples[1].1.layer, LayerKind::NewGrid);
    }
}
