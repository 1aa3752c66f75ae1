use crate::error::GridResult;
use crate::grid::GestureCurve;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
pub struct WordCurve<'a> {
    pub word: &'a str,
    pub curve: &'a GestureCurve,
}

#[derive(Debug, Serialize)]
struct CurvePointRow<'a> {
    word: &'a str,
    index: usize,
    x: f32,
    y: f32,
}

fn pair_up<'a, S: AsRef<str>>(words: &'a [S], curves: &'a [GestureCurve]) -> Vec<WordCurve<'a>> {
    words
        .iter()
        .zip(curves)
        .map(|(word, curve)| WordCurve {
            word: word.as_ref(),
            curve,
        })
        .collect()
}

/// Writes `[{"word": ..., "curve": [[x, y], ...]}, ...]`.
pub fn write_curves_json<W, S>(writer: W, words: &[S], curves: &[GestureCurve]) -> GridResult<()>
where
    W: Write,
    S: AsRef<str>,
{
    serde_json::to_writer_pretty(writer, &pair_up(words, curves))?;
    Ok(())
}

/// Writes one `word,index,x,y` row per curve point, with a header.
pub fn write_curves_csv<W, S>(writer: W, words: &[S], curves: &[GestureCurve]) -> GridResult<()>
where
    W: Write,
    S: AsRef<str>,
{
    let mut wtr = csv::Writer::from_writer(writer);

    for entry in pair_up(words, curves) {
        for (index, &[x, y]) in entry.curve.iter().enumerate() {
            wtr.serialize(CurvePointRow {
                word: entry.word,
                index,
                x,
                y,
            })?;
        }
    }

    wtr.flush()?;
    Ok(())
}
