mod common;

use anyhow::Result;
use predicates::prelude::*;

use common::*;

#[test]
fn test_example_table_is_rendered() -> Result<()> {
    let env = TestEnvironment::new()?;
    let table = env.create_input_file("table.txt", &create_example_table())?;
    let stem = env.output_stem("plot");

    totem_cmd()
        .arg("-i")
        .arg(&table)
        .arg("-o")
        .arg(&stem)
        .assert()
        .success()
        .stdout(predicate::str::contains("plot.png"));

    assert!(png_of(&stem).exists());
    Ok(())
}

#[test]
fn test_core_and_sort_render_with_custom_canvas() -> Result<()> {
    let env = TestEnvironment::new()?;
    let table = env.create_input_file("table.txt", &create_taxonomy_table())?;
    let core_a = env.create_input_file(
        "core_a.txt",
        &create_core_file(&["k__Bacteria;p__Firmicutes;c__Clostridia;o__Clostridiales"]),
    )?;
    let core_b = env.create_input_file(
        "core_b.txt",
        &create_core_file(&["k__Bacteria;p__Bacteroidetes;c__Bacteroidia;o__Bacteroidales"]),
    )?;
    let stem = env.output_stem("core");

    totem_cmd()
        .arg("-i")
        .arg(&table)
        .arg("-o")
        .arg(&stem)
        .arg("-c")
        .arg(&core_a)
        .arg(&core_b)
        .arg("-l")
        .arg("4")
        .arg("--sort")
        .arg("--width")
        .arg("800")
        .arg("--height")
        .arg("600")
        .assert()
        .success();

    let png = image::open(png_of(&stem))?;
    assert_eq!((png.width(), png.height()), (800, 600));
    Ok(())
}
