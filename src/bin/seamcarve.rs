// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::process;

use clap::{App, Arg, ArgMatches};
use failure::{format_err, Error, ResultExt};
use image::GenericImageView;
use seamcarver::SeamCarver;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn dimension(matches: &ArgMatches, name: &str, default: u32) -> Result<u32, Error> {
    match matches.value_of(name) {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| format_err!("--{} expects a pixel count, not {:?}", name, value)),
    }
}

fn run() -> Result<(), Error> {
    let matches = App::new("seamcarve")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image shrinking by seam carving")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the result; the format follows the extension")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .takes_value(true)
                .help("Target width in pixels (default: unchanged)"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .takes_value(true)
                .help("Target height in pixels (default: unchanged)"),
        )
        .arg(
            Arg::with_name("energy")
                .long("energy")
                .help("Write the energy map of the result instead of the result"),
        )
        .get_matches();

    let input = matches.value_of("input").unwrap_or_default();
    let output = matches.value_of("output").unwrap_or_default();

    let image = image::open(input).with_context(|_| format!("cannot read {}", input))?;
    let (width, height) = image.dimensions();
    let new_width = dimension(&matches, "width", width)?;
    let new_height = dimension(&matches, "height", height)?;
    info!(input, width, height, new_width, new_height, "loaded");

    let mut carver = SeamCarver::new(&image)?;
    carver.carve(new_width, new_height)?;

    let saved = if matches.is_present("energy") {
        carver.energy_picture().save(output)
    } else {
        carver.picture().save(output)
    };
    saved.with_context(|_| format!("cannot write {}", output))?;
    info!(output, "saved");
    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seamcarve=warn,seamcarver=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = run() {
        let causes: Vec<String> = err.iter_chain().map(|cause| cause.to_string()).collect();
        eprintln!("seamcarve: {}", causes.join(": "));
        process::exit(1);
    }
}
