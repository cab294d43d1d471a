use{
    std::{
        fs::File,
        io::{BufReader, Write},
        path::Path,
        process::exit
    },
    serde::{Serialize, de::DeserializeOwned},
    serde_json::Value
};

/// Reads the parameter struct from a json file.
/// If no file is given, a default json is printed to stdout instead
/// so it can be piped into a file and edited.
pub fn parse<P, T>(file: Option<P>) -> (T, Value)
where P: AsRef<Path>,
    T: Default + Serialize + DeserializeOwned
{
    match file
    {
        None => {
            let example = T::default();
            serde_json::to_writer_pretty(
                std::io::stdout(),
                &example
            ).expect("unable to write default json");
            println!();
            exit(0)
        },
        Some(file) => {
            let f = File::open(file)
                .expect("unable to open json file");
            let buf = BufReader::new(f);

            let json: Value = serde_json::from_reader(buf)
                .expect("invalid json");

            let opt = serde_json::from_value(json.clone())
                .expect("unable to deserialize parameters");

            (opt, json)
        }
    }
}

// the used options are stored in the header of the resulting data files
pub fn write_json<W: Write>(mut writer: W, json: &Value)
{
    write!(writer, "#").unwrap();
    serde_json::to_writer(&mut writer, json)
        .expect("unable to write json header");
    writeln!(writer).unwrap();
}
