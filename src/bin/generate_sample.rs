use std::fmt::Write as _;
use std::fs;

use anyhow::{Context, Result};

static PHYLA: [(&str, &[(&str, &str)]); 4] = [
    (
        "p__Firmicutes",
        &[
            ("c__Clostridia", "o__Clostridiales"),
            ("c__Bacilli", "o__Lactobacillales"),
            ("c__Erysipelotrichi", "o__Erysipelotrichales"),
        ],
    ),
    (
        "p__Bacteroidetes",
        &[
            ("c__Bacteroidia", "o__Bacteroidales"),
            ("c__Flavobacteriia", "o__Flavobacteriales"),
        ],
    ),
    (
        "p__Proteobacteria",
        &[
            ("c__Gammaproteobacteria", "o__Enterobacteriales"),
            ("c__Betaproteobacteria", "o__Burkholderiales"),
            ("c__Deltaproteobacteria", "o__Desulfovibrionales"),
        ],
    ),
    (
        "p__Actinobacteria",
        &[("c__Actinobacteria", "o__Bifidobacteriales")],
    ),
];

/// Deterministic splitmix64 stream, enough for reproducible sample values.
struct SampleRng(u64);

impl SampleRng {
    /// Uniform in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        (z >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Random weights normalised to relative abundances; about one in six is
/// zeroed so the plot shows the zero-removal step.
fn abundances(n: usize, rng: &mut SampleRng) -> Vec<f64> {
    let raw: Vec<f64> = (0..n)
        .map(|_| {
            if rng.next_f64() < 0.16 {
                0.0
            } else {
                rng.next_f64().powi(2)
            }
        })
        .collect();
    let total: f64 = raw.iter().sum();
    raw.iter().map(|v| if total > 0.0 { v / total } else { 0.0 }).collect()
}

/// The same lineage the way QIIME's core-OTU output serializes it.
fn as_list_literal(lineage: &[&str]) -> String {
    let items: Vec<String> = lineage.iter().map(|rank| format!("u'{rank}'")).collect();
    format!("[{}]", items.join(", "))
}

fn main() -> Result<()> {
    let mut rng = SampleRng(42);

    let lineages: Vec<Vec<&str>> = PHYLA
        .iter()
        .flat_map(|(phylum, orders)| {
            orders
                .iter()
                .map(move |(class, order)| vec!["k__Bacteria", *phylum, *class, *order])
        })
        .collect();

    let healthy = abundances(lineages.len(), &mut rng);
    let disease = abundances(lineages.len(), &mut rng);

    let mut table = String::from("# Constructed from biom file\n#OTU ID\tHealthy\tDisease\n");
    for ((lineage, h), d) in lineages.iter().zip(&healthy).zip(&disease) {
        writeln!(table, "{}\t{h:.4}\t{d:.4}", lineage.join(";"))?;
    }

    // Two core files, alternating lineages between them.
    let mut core_files = Vec::new();
    for offset in 0..2 {
        let mut core = String::from("# Core OTUs\n#OTU ID\ttaxonomy\n");
        for (i, lineage) in lineages.iter().enumerate().skip(offset).step_by(2) {
            let mut full = lineage.clone();
            full.extend(["f__", "g__", "s__"]);
            writeln!(core, "{}\t{}", 1000 + i, as_list_literal(&full))?;
        }
        core_files.push(core);
    }

    let outputs = [
        ("sample_table.txt", &table),
        ("sample_core_a.txt", &core_files[0]),
        ("sample_core_b.txt", &core_files[1]),
    ];
    for (path, content) in outputs {
        fs::write(path, content).with_context(|| format!("writing {path}"))?;
    }

    println!(
        "Wrote {} taxa to sample_table.txt and two core files; try:\n  \
         totem -i sample_table.txt -o sample -c sample_core_a.txt sample_core_b.txt -l 4 --sort",
        lineages.len()
    );
    Ok(())
}
