use super::{Cell, Relation, Row};
use crate::Error;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Controls how [`Relation::load`] splits delimited text into rows.
///
/// [`Relation::load`]: ./struct.Relation.html#method.load
#[derive(Clone, Debug)]
pub struct LoadOptions {
    /// Separates the fields of a line.
    pub delimiter: char,
    /// Skips the first non-blank line when set.
    pub has_header: bool,
    /// Trims surrounding whitespace from unquoted fields when set.
    pub trim: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            has_header: false,
            trim: true,
        }
    }
}

impl LoadOptions {
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn has_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}

impl Relation {
    /// Reads delimited rows from `reader` and appends them to the receiver, parsing every
    /// field with the type of its column. Returns the number of rows appended.
    ///
    /// Either every line is loaded or, on the first malformed line, an error is returned
    /// and the receiver is left unchanged.
    ///
    /// **Example**:
    /// ```rust
    /// use relbag::{LoadOptions, RelationBuilder, Type};
    ///
    /// let mut classroom = RelationBuilder::new()
    ///     .attribute_names(&["building", "room_number", "capacity"])
    ///     .attribute_types(&[Type::Text, Type::Integer, Type::Integer])
    ///     .build()
    ///     .unwrap();
    ///
    /// let data = "Packard,101,500\n\"Taylor, East\",3128,70\n";
    /// let count = classroom.load(data.as_bytes(), &LoadOptions::default()).unwrap();
    ///
    /// assert_eq!(2, count);
    /// assert_eq!(Some("Taylor, East"), classroom.row(1).unwrap()[0].as_text());
    /// ```
    pub fn load<R: BufRead>(&mut self, reader: R, options: &LoadOptions) -> Result<usize, Error> {
        let mut loaded = Vec::new();
        let mut header_skipped = !options.has_header;

        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            if !header_skipped {
                header_skipped = true;
                continue;
            }
            loaded.push(self.parse_line(number + 1, line, options)?);
        }

        let count = loaded.len();
        self.rows.extend(loaded);
        log::debug!(
            "loaded {} rows into {}",
            count,
            self.name().unwrap_or("relation")
        );
        Ok(count)
    }

    /// Opens the file at `path` and loads its rows with [`load`].
    ///
    /// [`load`]: #method.load
    pub fn load_file<P: AsRef<Path>>(
        &mut self,
        path: P,
        options: &LoadOptions,
    ) -> Result<usize, Error> {
        let file = File::open(path.as_ref())?;
        log::debug!("loading {}", path.as_ref().display());
        self.load(BufReader::new(file), options)
    }

    fn parse_line(&self, line: usize, text: &str, options: &LoadOptions) -> Result<Row, Error> {
        let fields =
            split_fields(text, options).map_err(|column| Error::Malformed { line, column })?;
        let types = self.types();
        if fields.len() != types.len() {
            return Err(Error::FieldCount {
                line,
                expected: types.len(),
                found: fields.len(),
            });
        }

        fields
            .into_iter()
            .zip(types)
            .enumerate()
            .map(|(column, (field, &ty))| {
                Cell::parse(ty, &field).ok_or_else(|| Error::Parse {
                    line,
                    column: column + 1,
                    value: field.clone(),
                    expected: ty,
                })
            })
            .collect()
    }
}

/// Splits `line` into fields. A malformed quoted field fails with its 1-based column.
fn split_fields(line: &str, options: &LoadOptions) -> Result<Vec<String>, usize> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut was_quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if quoted {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    quoted = false;
                }
            } else {
                field.push(c);
            }
        } else if c == '"' && !was_quoted && field.trim().is_empty() {
            field.clear();
            quoted = true;
            was_quoted = true;
        } else if c == options.delimiter {
            fields.push(finish(field, was_quoted, options));
            field = String::new();
            was_quoted = false;
        } else if was_quoted {
            // only whitespace may follow a closing quote
            if !c.is_whitespace() {
                return Err(fields.len() + 1);
            }
        } else {
            field.push(c);
        }
    }
    if quoted {
        return Err(fields.len() + 1);
    }
    fields.push(finish(field, was_quoted, options));
    Ok(fields)
}

fn finish(field: String, quoted: bool, options: &LoadOptions) -> String {
    if options.trim && !quoted {
        field.trim().to_string()
    } else {
        field
    }
}
