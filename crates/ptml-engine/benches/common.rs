use ptml_engine::{Builder, Document, SequenceError, tags};

// Shared by the bench targets in this directory.
#[allow(dead_code)]
pub fn generate_wide_document(rows: usize) -> Document {
    let mut b = Builder::new();
    b.scope(tags::table(), |b| {
        for row in 0..rows {
            b.scope(tags::tr().id(format!("row-{row}")), |b| {
                b.add(tags::td().content(format!("cell {row} & co")));
                b.add(tags::td().content("<b>escaped</b>").attr("title", "\"quoted\""));
                Ok(())
            })?;
        }
        Ok(())
    })
    .expect("balanced scopes");
    b.finish().expect("all scopes closed")
}

#[allow(dead_code)]
pub fn generate_deep_document(depth: usize) -> Document {
    fn nest(b: &mut Builder, remaining: usize) -> Result<(), SequenceError> {
        if remaining == 0 {
            b.add(tags::span().content("leaf"));
            return Ok(());
        }
        b.scope(tags::div().class(["level", "nested"]), |b| {
            nest(b, remaining - 1)?;
            b.add(tags::comment("sibling"));
            Ok(())
        })?;
        Ok(())
    }

    let mut b = Builder::new();
    nest(&mut b, depth).expect("balanced scopes");
    b.finish().expect("all scopes closed")
}
