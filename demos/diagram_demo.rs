//! Complete workflow demonstration for planar_voronoi

use planar_voronoi::*;

fn main() -> Result<()> {
    println!("=== planar_voronoi Complete Demo ===\n");

    // Step 1: Points and outline
    println!("Step 1: Sampling points...");
    let outline = [
        DVec2::new(0.0, 0.0),
        DVec2::new(100.0, 0.0),
        DVec2::new(100.0, 60.0),
        DVec2::new(0.0, 60.0),
    ];
    let points = generate_random_points(500, DVec2::splat(1.0), DVec2::new(99.0, 59.0), 12345);
    println!("  {} points inside a 100 x 60 outline", points.len());

    // Step 2: Configure
    println!("\nStep 2: Configuring diagram...");
    let config = DiagramConfigBuilder::new()
        .seed(12345)
        .strategy(CellStrategy::Connectivity)
        .lloyd_iterations(3)?
        .build()?;
    println!("  Seed: {}", config.seed);
    println!("  Strategy: {}", config.strategy.name());

    // Step 3: Generate
    println!("\nStep 3: Generating diagram...");
    let start = std::time::Instant::now();
    let diagram = VoronoiDiagram::generate(&points, &outline, config)?;
    println!("  Triangles: {}", diagram.faces().len());
    println!("  Adjacency edges: {}", diagram.connectivity().edge_count());
    println!("  Cells: {}", diagram.cells().iter().flatten().count());
    println!("  Took {:?}", start.elapsed());

    // Step 4: Cell statistics
    println!("\nStep 4: Cell statistics:");
    let areas: Vec<f64> = diagram.cells().iter().flatten().map(|c| c.area()).collect();
    let total: f64 = areas.iter().sum();
    let smallest = areas.iter().copied().fold(f64::MAX, f64::min);
    let largest = areas.iter().copied().fold(0.0, f64::max);
    println!("  Total area: {:.3} (outline 6000)", total);
    println!("  Smallest / largest: {:.3} / {:.3}", smallest, largest);

    // Step 5: Queries
    println!("\nStep 5: Queries:");
    #[cfg(feature = "spatial-index")]
    {
        let probe = DVec2::new(50.0, 30.0);
        let cell_id = diagram.find_cell_at(probe);
        println!("  Position {:?} -> Cell {}", probe, cell_id);
        println!("  Cell has {} neighbors", diagram.get_neighbors(cell_id).len());
        println!(
            "  Cells within 2 hops: {}",
            diagram.find_cells_within_hops(cell_id, 2).len()
        );
    }

    // Step 6: Cross-check with the brute-force strategy
    println!("\nStep 6: Brute-force comparison...");
    let brute = voronoi::solve_brute_force(diagram.generators(), &outline);
    let mismatches = brute
        .iter()
        .zip(diagram.cells())
        .filter(|(a, b)| match (a, b) {
            (Some(a), Some(b)) => (a.area() - b.area()).abs() > 1e-6,
            (None, None) => false,
            _ => true,
        })
        .count();
    println!("  Mismatched cells: {}", mismatches);

    println!("\n=== Demo Complete ===");
    Ok(())
}
