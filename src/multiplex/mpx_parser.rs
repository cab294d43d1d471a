use{
    std::{
        fmt,
        fs::File,
        io::{BufRead, BufReader},
        path::Path
    }
};

/// Raw content of a `.mpx` multilayer network file.
/// Actors and layers are still referenced by name here,
/// relabelling to indices happens in `MultiplexNetwork`.
#[derive(Debug, Clone, Default)]
pub struct MpxData{
    pub layers: Vec<MpxLayer>,
    pub actors: Vec<String>,
    // (actor, layer)
    pub vertices: Vec<(String, String)>,
    // (actor, actor, layer)
    pub edges: Vec<(String, String, String)>
}

#[derive(Debug, Clone)]
pub struct MpxLayer{
    pub name: String,
    // parsed but not acted upon, all supported networks are undirected
    pub directed: bool
}

#[derive(Debug)]
pub enum MpxError{
    Io(std::io::Error),
    MalformedRecord{
        line: usize,
        record: String
    },
    UnknownLayer{
        line: usize,
        layer: String
    }
}

impl fmt::Display for MpxError{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self{
            Self::Io(e) => write!(f, "io error while reading mpx file: {e}"),
            Self::MalformedRecord{line, record} =>
                write!(f, "malformed record in line {line}: '{record}'"),
            Self::UnknownLayer{line, layer} =>
                write!(f, "line {line} references layer '{layer}' which is not declared in #LAYERS")
        }
    }
}

impl From<std::io::Error> for MpxError{
    fn from(e: std::io::Error) -> Self{
        Self::Io(e)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section{
    Preamble,
    Layers,
    Actors,
    Vertices,
    Edges,
    // attribute sections and anything we do not understand
    Skipped
}

fn section_of_header(header: &str) -> Section
{
    let upper = header.trim_start_matches('#').trim().to_uppercase();
    match upper.as_str(){
        "LAYERS" => Section::Layers,
        "ACTORS" => Section::Actors,
        "VERTICES" | "NODES" => Section::Vertices,
        "EDGES" => Section::Edges,
        _ => Section::Skipped
    }
}

fn split_record(line: &str) -> Vec<&str>
{
    line.split(',')
        .map(|field| field.trim())
        .collect()
}

impl MpxData{
    fn layer_known(&self, name: &str) -> bool
    {
        self.layers.iter().any(|l| l.name == name)
    }

    /// Layer lookup for records. Layers used in #VERTICES/#EDGES without a
    /// #LAYERS section are registered on the fly, an explicit #LAYERS
    /// section is authoritative.
    fn check_layer(
        &mut self,
        name: &str,
        had_layer_section: bool,
        line: usize
    ) -> Result<(), MpxError>
    {
        if self.layer_known(name){
            return Ok(());
        }
        if had_layer_section{
            return Err(
                MpxError::UnknownLayer{
                    line,
                    layer: name.to_owned()
                }
            );
        }
        self.layers.push(
            MpxLayer{
                name: name.to_owned(),
                directed: false
            }
        );
        Ok(())
    }
}

pub fn parse_mpx<R: BufRead>(reader: R) -> Result<MpxData, MpxError>
{
    let mut data = MpxData::default();
    let mut section = Section::Preamble;
    let mut had_layer_section = false;

    for (index, line) in reader.lines().enumerate(){
        let line = line?;
        let line_number = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty(){
            continue;
        }
        if trimmed.starts_with('#'){
            section = section_of_header(trimmed);
            if section == Section::Layers{
                had_layer_section = true;
            }
            continue;
        }

        let fields = split_record(trimmed);
        match section{
            Section::Preamble | Section::Skipped => {},
            Section::Layers => {
                // name followed by optional flags such as UNDIRECTED
                let name = fields[0];
                if name.is_empty(){
                    return Err(malformed(line_number, trimmed));
                }
                let directed = fields.iter()
                    .skip(1)
                    .any(|f| f.eq_ignore_ascii_case("DIRECTED"));
                if !data.layer_known(name){
                    data.layers.push(
                        MpxLayer{
                            name: name.to_owned(),
                            directed
                        }
                    );
                }
            },
            Section::Actors => {
                // actor name, attribute values are ignored
                let name = fields[0];
                if name.is_empty(){
                    return Err(malformed(line_number, trimmed));
                }
                data.actors.push(name.to_owned());
            },
            Section::Vertices => {
                if fields.len() < 2 || fields[0].is_empty(){
                    return Err(malformed(line_number, trimmed));
                }
                data.check_layer(fields[1], had_layer_section, line_number)?;
                data.vertices.push(
                    (fields[0].to_owned(), fields[1].to_owned())
                );
            },
            Section::Edges => {
                if fields.len() < 2 || fields[0].is_empty() || fields[1].is_empty(){
                    return Err(malformed(line_number, trimmed));
                }
                let layer = if fields.len() >= 3 && !fields[2].is_empty(){
                    fields[2].to_owned()
                } else if data.layers.len() == 1 {
                    // single layer networks may omit the layer column
                    data.layers[0].name.clone()
                } else {
                    return Err(malformed(line_number, trimmed));
                };
                data.check_layer(&layer, had_layer_section, line_number)?;
                data.edges.push(
                    (fields[0].to_owned(), fields[1].to_owned(), layer)
                );
            }
        }
    }

    Ok(data)
}

pub fn parse_mpx_file<P: AsRef<Path>>(path: P) -> Result<MpxData, MpxError>
{
    let file = File::open(path)?;
    parse_mpx(BufReader::new(file))
}

fn malformed(line: usize, record: &str) -> MpxError
{
    MpxError::MalformedRecord{
        line,
        record: record.to_owned()
    }
}


#[cfg(test)]
mod tests{
    use super::*;

    const SMALL_MPX: &str = "\
#TYPE multiplex
#VERSION 2.0
#LAYERS
lunch,UNDIRECTED
facebook,UNDIRECTED

#ACTOR ATTRIBUTES
group,STRING

#ACTORS
U1,g1
U2,g1
U3,g2

#VERTICES
U1,lunch
U2,lunch

#EDGES
U1,U2,lunch
U2,U3,lunch
U1,U3,facebook
";

    #[test]
    fn parses_sections()
    {
        let data = parse_mpx(SMALL_MPX.as_bytes()).unwrap();
        assert_eq!(data.layers.len(), 2);
        assert_eq!(data.layers[0].name, "lunch");
        assert!(!data.layers[0].directed);
        assert_eq!(data.actors, vec!["U1", "U2", "U3"]);
        assert_eq!(data.vertices.len(), 2);
        assert_eq!(data.edges.len(), 3);
        assert_eq!(data.edges[2], ("U1".to_owned(), "U3".to_owned(), "facebook".to_owned()));
    }

    #[test]
    fn attribute_sections_are_skipped()
    {
        let data = parse_mpx(SMALL_MPX.as_bytes()).unwrap();
        // the record of the actor attribute section must not leak anywhere
        assert!(data.actors.iter().all(|a| a != "group"));
    }

    #[test]
    fn missing_layer_column_with_single_layer()
    {
        let input = "\
#LAYERS
only,UNDIRECTED
#EDGES
a,b
";
        let data = parse_mpx(input.as_bytes()).unwrap();
        assert_eq!(data.edges[0].2, "only");
    }

    #[test]
    fn undeclared_layer_is_an_error()
    {
        let input = "\
#LAYERS
lunch,UNDIRECTED
#EDGES
a,b,dinner
";
        let err = parse_mpx(input.as_bytes()).unwrap_err();
        assert!(matches!(err, MpxError::UnknownLayer{layer, ..} if layer == "dinner"));
    }

    #[test]
    fn layers_register_on_the_fly_without_section()
    {
        let input = "\
#EDGES
a,b,lunch
b,c,work
";
        let data = parse_mpx(input.as_bytes()).unwrap();
        assert_eq!(data.layers.len(), 2);
    }

    #[test]
    fn malformed_edge_is_reported_with_line()
    {
        let input = "\
#LAYERS
lunch,UNDIRECTED
work,UNDIRECTED
#EDGES
a
";
        let err = parse_mpx(input.as_bytes()).unwrap_err();
        assert!(matches!(err, MpxError::MalformedRecord{line: 5, ..}));
    }
}
