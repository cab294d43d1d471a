use std::mem::ManuallyDrop;
use std::process::Command;

use{
    std::{
        fs::File,
        io::{Write, BufWriter}
    },
    serde_json::Value,
    crate::json_parsing::write_json,
    super::*
};

pub type CurveWriter = BufWriter<File>;

/// Writes the raw per-run infected and aware curves, one run per line.
/// The files are zipped once the writer goes out of scope.
pub struct UaCurveWriter
{
    pub writer_i: ManuallyDrop<CurveWriter>,
    pub writer_a: ManuallyDrop<CurveWriter>,
    pub paths: [String; 2]
}

impl Drop for UaCurveWriter
{
    fn drop(&mut self)
    {
        // first drop all the Writers!
        unsafe{
            ManuallyDrop::drop(&mut self.writer_i);
            ManuallyDrop::drop(&mut self.writer_a);
        };

        // next: Zipping time!
        for path in self.paths.iter()
        {
            let out = Command::new("gzip")
                .arg(path)
                .output();
            match out {
                Ok(_) => println!("Success! Zipped {path}"),
                Err(e) => println!("Error! Failed to zip {path} due to {:?}", e)
            }
        }
    }
}

impl UaCurveWriter
{
    pub fn new(name: &str) -> Self
    {
        let names: [String; 2] = [
            format!("{name}_i.curves"),
            format!("{name}_a.curves")
        ];

        let mut files = names.clone().map(
            |name|
            {
                BufWriter::new(
                    File::create(name)
                        .expect("unable to create curve file")
                )
            }
        ).into_iter();


        Self{
            writer_i: ManuallyDrop::new(files.next().unwrap()),
            writer_a: ManuallyDrop::new(files.next().unwrap()),
            paths: names
        }
    }

    /// json header line, to be written before the first run
    pub fn write_header(&mut self, json: &Value)
    {
        write_json(&mut *self.writer_i, json);
        write_json(&mut *self.writer_a, json);
    }

    pub fn write_run(&mut self, run: u64, log: &SimulationLog) -> std::io::Result<()>
    {
        write!(self.writer_i, "{run}")?;
        for val in log.counts.iter().map(|c| c.i)
        {
            write!(self.writer_i, " {val}")?;
        }
        writeln!(self.writer_i)?;

        write!(self.writer_a, "{run}")?;
        for val in log.counts.iter().map(|c| c.a)
        {
            write!(self.writer_a, " {val}")?;
        }
        writeln!(self.writer_a)
    }
}


#[cfg(test)]
mod tests{
    use super::*;
    use std::io::Read;

    fn read_lines(path: &str) -> Vec<String>
    {
        let mut content = String::new();
        File::open(path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        content.lines().map(str::to_owned).collect()
    }

    #[test]
    fn json_header_precedes_the_curves()
    {
        let base = std::env::temp_dir()
            .join(format!("ua_curve_writer_check_{}", std::process::id()));
        let base = base.to_string_lossy().into_owned();

        let json = serde_json::json!({"runs": 1});
        let log = SimulationLog{
            counts: vec![
                EpochCounts{s: 1, i: 1, r: 0, u: 2, a: 0},
                EpochCounts{s: 0, i: 2, r: 0, u: 1, a: 1}
            ]
        };

        let mut writer = UaCurveWriter::new(&base);
        writer.write_header(&json);
        writer.write_run(0, &log).unwrap();
        writer.writer_i.flush().unwrap();
        writer.writer_a.flush().unwrap();

        for path in writer.paths.clone()
        {
            let lines = read_lines(&path);
            assert!(lines[0].starts_with('#'));
            assert!(lines[0].contains("\"runs\":1"));
        }
        assert_eq!(read_lines(&writer.paths[0])[1], "0 1 2");
        assert_eq!(read_lines(&writer.paths[1])[1], "0 0 1");
    }
}
