/// Bakes six cube face PNGs into the environment cubemap DDS
mod cubemap;
mod dds_writer;
mod error;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use error::BakeError;

#[derive(Parser, Debug)]
#[command(version, about = "Pack six cube face PNGs into a cubemap DDS")]
struct Args {
    /// Directory holding px.png, nx.png, py.png, ny.png, pz.png and nz.png
    #[arg(short, long)]
    input: PathBuf,

    /// Output .dds file
    #[arg(short, long)]
    output: PathBuf,

    /// File name prefix shared by the faces, e.g. `studio_` for `studio_px.png`
    #[arg(long, default_value = "")]
    prefix: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match bake(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn bake(args: &Args) -> Result<(), BakeError> {
    println!("Reading cube faces from {}", args.input.display());
    let faces = cubemap::load_faces(&cubemap::face_paths(&args.input, &args.prefix))?;
    let (size, data) = cubemap::pack_cube_faces(&faces)?;

    println!("Writing {size}x{size} cubemap to {}", args.output.display());
    dds_writer::write_cubemap_dds(&args.output, size, data)?;
    println!("Done");
    Ok(())
}
