use sentisift_filters::{normalize, FilterPipeline, JunkFilterConfig};

fn main() {
    println!("Junk Filter Demo\n");
    println!("================\n");

    demo_normalization();
    println!("\n---\n");

    demo_filtering();
    println!("\n---\n");

    demo_batch_stats();
}

fn demo_normalization() {
    println!("Demo 1: Normalization");
    println!("=====================\n");

    let samples = [
        "  Muy Buena Atención  ",
        "EXCELENTE SERVICIO",
        "El Niño pequeño",
        "café résumé",
    ];

    for sample in samples {
        println!("{:28} -> {:?}", format!("{:?}", sample), normalize(sample));
    }
}

fn demo_filtering() {
    println!("Demo 2: Keep/Drop Decisions");
    println!("===========================\n");

    let pipeline = FilterPipeline::default();

    let comments = [
        ("Generic", "N/A"),
        ("Symbols", "12345 !!!"),
        ("Repetitive", "jajajaja"),
        ("Too short", "ok si"),
        ("Good", "la comida estuvo muy buena"),
        ("Good accented", "muy buena atención del personal"),
    ];

    for (label, comment) in comments {
        let eval = pipeline.evaluate(comment);
        match eval.dropped {
            Some(reason) => println!("{:14} | DROP ({})", label, reason.as_str()),
            None => println!("{:14} | KEEP -> {:?}", label, eval.normalized),
        }
    }
}

fn demo_batch_stats() {
    println!("Demo 3: Batch Statistics");
    println!("========================\n");

    let pipeline = FilterPipeline::new(JunkFilterConfig::default());

    let comments: Vec<String> = vec![
        "NA".into(),
        "el servicio fue rapido y amable".into(),
        "....".into(),
        "xx".into(),
        "muy buena atención".into(),
        "la comida llego fria y tarde".into(),
        "".into(),
    ];

    let outcome = pipeline.run(&comments);

    println!("Total:     {}", outcome.stats.total);
    println!("Kept:      {} ({:.1}%)", outcome.stats.kept, outcome.stats.retention_rate());
    println!("Dropped:   {}", outcome.stats.dropped());
    println!();

    for comment in &outcome.kept {
        println!("  kept: {}", comment);
    }
}
