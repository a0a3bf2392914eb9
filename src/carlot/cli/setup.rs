use carlot::model::Field;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "carlot", bin_name = "carlot", version)]
#[command(about = "Vehicle inventory for a dealership lot", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Inventory file to use instead of the configured one
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// One flag per field of the edit form.
#[derive(Args, Debug, Default, Clone)]
pub struct CarArgs {
    /// Stock id (must be unique)
    #[arg(long = "id", value_name = "ID")]
    pub car_id: Option<String>,

    #[arg(long)]
    pub make: Option<String>,

    #[arg(long)]
    pub model: Option<String>,

    #[arg(long)]
    pub year: Option<String>,

    /// Mileage, "km" is appended when missing
    #[arg(long)]
    pub odometer: Option<String>,

    /// Power, "hp" is appended when missing
    #[arg(long)]
    pub hp: Option<String>,

    /// Torque, "Nm" is appended when missing
    #[arg(long)]
    pub torque: Option<String>,

    /// Asking price, "$" is appended when missing
    #[arg(long)]
    pub price: Option<String>,
}

impl CarArgs {
    /// The values given on the command line, in field order.
    pub fn provided(&self) -> Vec<(Field, &str)> {
        [
            (Field::Id, &self.car_id),
            (Field::Make, &self.make),
            (Field::Model, &self.model),
            (Field::Year, &self.year),
            (Field::Odometer, &self.odometer),
            (Field::Hp, &self.hp),
            (Field::Torque, &self.torque),
            (Field::Price, &self.price),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List cars
    #[command(alias = "ls")]
    List {
        /// Column to sort by (any header name)
        #[arg(short, long, value_name = "COLUMN")]
        sort: Option<String>,

        /// Sort descending
        #[arg(short, long, requires = "sort")]
        desc: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one car
    #[command(alias = "v")]
    View {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Add a car (every field is required)
    #[command(alias = "a")]
    Add {
        #[command(flatten)]
        car: CarArgs,
    },

    /// Edit a car; fields not given keep their current value
    #[command(alias = "e")]
    Edit {
        /// Current id of the car to edit
        #[arg(value_name = "ID")]
        original_id: String,

        #[command(flatten)]
        car: CarArgs,
    },

    /// Delete a car
    #[command(alias = "rm")]
    Delete {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Print the path of the inventory file
    Path,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
