#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch directory holding the inputs and outputs of one test.
pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
        })
    }

    pub fn create_input_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn output_stem(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }
}

pub fn totem_cmd() -> Command {
    Command::cargo_bin("totem").expect("totem binary is built")
}

pub fn png_of(stem: &Path) -> PathBuf {
    let mut path = stem.as_os_str().to_owned();
    path.push(".png");
    PathBuf::from(path)
}

/// Three OTUs of which only OTU1 has both values non-zero.
pub fn create_example_table() -> String {
    "#OTU ID\tSampleA\tSampleB\n\
     OTU1\t0.10\t0.05\n\
     OTU2\t0.00\t0.20\n\
     OTU3\t0.30\t0.00\n"
        .to_string()
}

/// A table whose identifiers are four-rank taxonomy strings.
pub fn create_taxonomy_table() -> String {
    "# Constructed from biom file\n\
     #OTU ID\tHealthy\tDisease\n\
     k__Bacteria;p__Firmicutes;c__Clostridia;o__Clostridiales\t0.40\t0.25\n\
     k__Bacteria;p__Bacteroidetes;c__Bacteroidia;o__Bacteroidales\t0.30\t0.45\n\
     k__Bacteria;p__Proteobacteria;c__Gammaproteobacteria;o__Enterobacteriales\t0.02\t0.10\n"
        .to_string()
}

pub fn create_core_file(taxa: &[&str]) -> String {
    let mut content = String::from("# Core OTUs\n#OTU ID\ttaxonomy\n");
    for (i, taxon) in taxa.iter().enumerate() {
        let quoted: Vec<String> = taxon.split(';').map(|t| format!("u'{t}'")).collect();
        content.push_str(&format!("{}\t[{}]\n", 1000 + i, quoted.join(", ")));
    }
    content
}
