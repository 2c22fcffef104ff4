//! Command-line front end driving the canvas against JSON files

use crate::canvas::geometry::{CanvasRect, GridSpec, ItemSize, Point};
use crate::canvas::session::CanvasSession;
use crate::io::configuration::{
    ACCESSORY_PROBABILITY, DEFAULT_ATTEMPT_LIMIT, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH,
    DEFAULT_ITEM_SIZE, DEFAULT_TRIP_DAYS, FULL_OUTFIT_PROBABILITY, OUTERWEAR_PROBABILITY,
};
use crate::io::error::{Result, invalid_parameter, output_failed};
use crate::io::storage::{
    load_record, load_state_or_default, load_wardrobe, save_record, save_state,
};
use crate::outfit::composer::{ComposerConfig, OutfitComposer};
use crate::outfit::record::OutfitRecord;
use crate::outfit::share::{share, share_url};
use crate::trip::packing::PackingList;
use crate::wardrobe::garment::GarmentId;
use crate::wardrobe::palette::clash_labels;
use crate::wardrobe::slot::BodySlot;
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "outfit-canvas")]
#[command(author, version, about = "Compose and arrange outfits from a wardrobe export")]
/// Command-line arguments for the outfit canvas tool
pub struct Cli {
    /// Log filter (error, warn, info, debug, trace); `RUST_LOG` takes precedence
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Canvas size and item size used for snapping
#[derive(Args, Clone, Copy, Debug)]
pub struct CanvasArgs {
    /// Canvas width in pixels
    #[arg(long, default_value_t = DEFAULT_CANVAS_WIDTH)]
    pub canvas_width: f64,

    /// Canvas height in pixels
    #[arg(long, default_value_t = DEFAULT_CANVAS_HEIGHT)]
    pub canvas_height: f64,

    /// Side of a free item in pixels
    #[arg(long, default_value_t = DEFAULT_ITEM_SIZE)]
    pub item_size: f64,
}

impl CanvasArgs {
    /// Canvas rectangle
    pub const fn rect(&self) -> CanvasRect {
        CanvasRect::new(self.canvas_width, self.canvas_height)
    }

    /// Item bounding box
    pub const fn item(&self) -> ItemSize {
        ItemSize::square(self.item_size)
    }
}

/// Available operations
#[derive(Subcommand)]
pub enum Command {
    /// Compose a random casual outfit
    Generate {
        /// Wardrobe JSON export
        wardrobe: PathBuf,

        /// Write the resulting outfit state here
        #[arg(short, long)]
        state: Option<PathBuf>,

        /// Random seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Attempts before giving up
        #[arg(short, long, default_value_t = DEFAULT_ATTEMPT_LIMIT)]
        attempts: usize,

        /// Chance of a full-body garment when one exists
        #[arg(long, default_value_t = FULL_OUTFIT_PROBABILITY)]
        full_probability: f64,

        /// Chance of adding outerwear
        #[arg(long, default_value_t = OUTERWEAR_PROBABILITY)]
        outer_probability: f64,

        /// Chance of adding an accessory
        #[arg(long, default_value_t = ACCESSORY_PROBABILITY)]
        accessory_probability: f64,
    },

    /// Put a garment in a slot or drop it on the canvas
    Place {
        /// Wardrobe JSON export
        wardrobe: PathBuf,

        /// Outfit state file, created if missing
        #[arg(short, long)]
        state: PathBuf,

        /// Garment identifier
        #[arg(short, long)]
        garment: String,

        /// Named slot; omit to drop on the canvas at `--x`/`--y`
        #[arg(long)]
        slot: Option<BodySlot>,

        /// Pointer x coordinate
        #[arg(short, long, required_unless_present = "slot", conflicts_with = "slot")]
        x: Option<f64>,

        /// Pointer y coordinate
        #[arg(short, long, required_unless_present = "slot", conflicts_with = "slot")]
        y: Option<f64>,

        /// Canvas geometry
        #[command(flatten)]
        canvas: CanvasArgs,
    },

    /// Drag a free garment to a new position
    Drag {
        /// Outfit state file
        #[arg(short, long)]
        state: PathBuf,

        /// Garment identifier
        #[arg(short, long)]
        garment: String,

        /// Item left edge under the pointer
        #[arg(short, long)]
        x: f64,

        /// Item top edge under the pointer
        #[arg(short, long)]
        y: f64,

        /// Canvas geometry
        #[command(flatten)]
        canvas: CanvasArgs,
    },

    /// Print the canvas grid
    Show {
        /// Outfit state file
        #[arg(short, long)]
        state: PathBuf,

        /// Canvas geometry
        #[command(flatten)]
        canvas: CanvasArgs,
    },

    /// Turn an outfit state into a stored outfit record
    Save {
        /// Wardrobe JSON export
        wardrobe: PathBuf,

        /// Outfit state file
        #[arg(short, long)]
        state: PathBuf,

        /// Outfit name
        #[arg(short, long, default_value = "")]
        name: String,

        /// Record file to write
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Restore an outfit state from a stored record
    Load {
        /// Record file
        record: PathBuf,

        /// Outfit state file to write
        #[arg(short, long)]
        state: PathBuf,
    },

    /// Make a stored outfit public and print its link
    Share {
        /// Record file, updated in place
        record: PathBuf,

        /// Site origin links are built on
        #[arg(long)]
        base_url: String,
    },

    /// Print a packing list for a trip
    Pack {
        /// Wardrobe JSON export
        wardrobe: PathBuf,

        /// Trip length in days
        #[arg(short, long, default_value_t = DEFAULT_TRIP_DAYS)]
        days: u32,

        /// Trip name
        #[arg(short, long)]
        name: Option<String>,

        /// Garments to pack as `ID` or `ID=QUANTITY`
        #[arg(value_name = "ITEM")]
        items: Vec<String>,
    },
}

impl Cli {
    /// Run the selected command, writing user-facing output to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or written, a garment is
    /// unknown, parameters are invalid, or no outfit could be composed
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        match &self.command {
            Command::Generate {
                wardrobe,
                state,
                seed,
                attempts,
                full_probability,
                outer_probability,
                accessory_probability,
            } => {
                let config = ComposerConfig {
                    full_probability: *full_probability,
                    outer_probability: *outer_probability,
                    accessory_probability: *accessory_probability,
                    attempt_limit: *attempts,
                };
                let wardrobe = load_wardrobe(wardrobe)?;
                let mut composer = match seed {
                    Some(seed) => OutfitComposer::seeded(config, *seed)?,
                    None => OutfitComposer::from_os_rng(config)?,
                };
                let mut session = CanvasSession::new(GridSpec::default());
                let composed = session.generate(&wardrobe, &mut composer)?;

                writeln!(out, "Casual outfit (attempt {}):", composed.attempts)
                    .map_err(output_failed)?;
                for (slot, id) in composed.slots.iter() {
                    let name = wardrobe.get(id.as_str()).map_or("?", |g| g.display_name());
                    writeln!(out, "  {:<12} {id} ({name})", slot.label()).map_err(output_failed)?;
                }
                log::debug!("Avoided colour pairs: {}", clash_labels().join(", "));
                if let Some(path) = state {
                    save_state(path, session.state())?;
                }
                Ok(())
            }
            Command::Place {
                wardrobe,
                state,
                garment,
                slot,
                x,
                y,
                canvas,
            } => {
                let wardrobe = load_wardrobe(wardrobe)?;
                let mut session =
                    CanvasSession::with_state(GridSpec::default(), load_state_or_default(state)?);
                let id = GarmentId::from(garment.as_str());

                if let Some(slot) = slot {
                    let replaced = session.drop_on_slot(&wardrobe, *slot, &id)?;
                    writeln!(out, "{id} -> {slot}").map_err(output_failed)?;
                    if let Some(replaced) = replaced {
                        writeln!(out, "{replaced} taken off {slot}").map_err(output_failed)?;
                    }
                } else {
                    let (Some(x), Some(y)) = (x, y) else {
                        return Err(invalid_parameter(
                            "x/y",
                            &"missing",
                            &"a pointer position is required without --slot",
                        ));
                    };
                    let origin = session.drop_on_canvas(
                        &wardrobe,
                        &id,
                        Point::new(*x, *y),
                        canvas.rect(),
                        canvas.item(),
                    )?;
                    writeln!(out, "{id} -> ({:.1}, {:.1})", origin.x, origin.y)
                        .map_err(output_failed)?;
                }

                save_state(state, session.state())
            }
            Command::Drag {
                state,
                garment,
                x,
                y,
                canvas,
            } => {
                let mut session =
                    CanvasSession::with_state(GridSpec::default(), load_state_or_default(state)?);
                let id = GarmentId::from(garment.as_str());
                let Some(origin) =
                    session.drag_to(&id, Point::new(*x, *y), canvas.rect(), canvas.item())
                else {
                    return Err(invalid_parameter(
                        "garment",
                        garment,
                        &"not placed freely on the canvas",
                    ));
                };
                writeln!(out, "{id} -> ({:.1}, {:.1})", origin.x, origin.y).map_err(output_failed)?;
                save_state(state, session.state())
            }
            Command::Show { state, canvas } => {
                let session =
                    CanvasSession::with_state(GridSpec::default(), load_state_or_default(state)?);
                write!(out, "{}", session.layout(canvas.rect(), canvas.item()))
                    .map_err(output_failed)?;
                Ok(())
            }
            Command::Save {
                wardrobe,
                state,
                name,
                output,
            } => {
                let wardrobe = load_wardrobe(wardrobe)?;
                let state = load_state_or_default(state)?;
                let record = OutfitRecord::from_state(name, &state, &wardrobe)?;
                save_record(output, &record)?;
                writeln!(
                    out,
                    "Saved \"{}\" with {} items",
                    record.name,
                    record.items.len()
                )
                .map_err(output_failed)?;
                Ok(())
            }
            Command::Load { record, state } => {
                let record = load_record(record)?;
                save_state(state, &record.to_state())?;
                writeln!(out, "Loaded \"{}\"", record.name).map_err(output_failed)?;
                Ok(())
            }
            Command::Share { record, base_url } => {
                let mut stored = load_record(record)?;
                let url = share_url(base_url, share(&mut stored));
                save_record(record, &stored)?;
                writeln!(out, "{url}").map_err(output_failed)?;
                Ok(())
            }
            Command::Pack {
                wardrobe,
                days,
                name,
                items,
            } => {
                let wardrobe = load_wardrobe(wardrobe)?;
                let mut list = PackingList::new(name.clone(), *days);
                for item in items {
                    let (id, quantity) = parse_pack_item(item)?;
                    list.set_quantity(id, quantity);
                }
                writeln!(out, "{}", list.export_text(&wardrobe)).map_err(output_failed)?;
                Ok(())
            }
        }
    }
}

/// Parse `ID` or `ID=QUANTITY`
///
/// # Errors
///
/// Returns an error if the quantity is not a positive integer
pub fn parse_pack_item(item: &str) -> Result<(GarmentId, u32)> {
    match item.split_once('=') {
        Some((id, quantity)) => {
            let quantity: u32 = quantity
                .parse()
                .map_err(|_parse_error| invalid_parameter("quantity", &quantity, &"not an integer"))?;
            if quantity == 0 {
                return Err(invalid_parameter("quantity", &quantity, &"must be at least 1"));
            }
            Ok((GarmentId::from(id), quantity))
        }
        None => Ok((GarmentId::from(item), 1)),
    }
}
