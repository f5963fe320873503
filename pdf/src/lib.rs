//! Renders a scaled recipe into a downloadable PDF sheet.

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Pt, Rgb, TextMatrix,
};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("PDF assembly failed: {0}")]
    Assembly(String),
}

impl Error {
    fn assembly(err: impl std::fmt::Display) -> Self {
        Self::Assembly(err.to_string())
    }
}

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 20.0;
const MARGIN_TOP: f32 = 20.0;
const MARGIN_BOTTOM: f32 = 25.0;
const ITEM_INDENT: f32 = 6.0;
const LINE_HEIGHT: f32 = 6.0;
const SECTION_GAP: f32 = 4.0;

const TITLE_SIZE: f32 = 18.0;
const BODY_SIZE: f32 = 12.0;
const CLOSING_SIZE: f32 = 10.0;
const WATERMARK_SIZE: f32 = 50.0;

// Helvetica at body size stays inside the right margin up to roughly this
// many characters.
const WRAP_COLUMNS: usize = 86;

const WATERMARK: &str = "BrewNation";
const CLOSING_LINE: &str = "Thank you for visiting BrewNation!";

/// File name offered for the download of `style`'s sheet.
pub fn file_name(style: &str) -> String {
    format!("{style}_Recipe.pdf")
}

/// Render `recipe` into the bytes of a ready-to-download PDF document.
pub fn render(recipe: &models::ScaledRecipe) -> Result<Vec<u8>, Error> {
    let title = format!("{} Recipe", recipe.name);
    let mut painter = Painter::new(&title)?;

    painter.line(&title, TITLE_SIZE, 0.0, true);
    painter.space(SECTION_GAP);

    for line in body_lines(recipe) {
        match line {
            Line::Section(text) => painter.line(&text, BODY_SIZE, 0.0, true),
            Line::Entry(text) => {
                for part in wrap(&text, WRAP_COLUMNS) {
                    painter.line(&part, BODY_SIZE, 0.0, false);
                }
            }
            Line::Item(text) => {
                for part in wrap(&text, WRAP_COLUMNS) {
                    painter.line(&part, BODY_SIZE, ITEM_INDENT, false);
                }
            }
            Line::Gap => painter.space(SECTION_GAP),
        }
    }

    painter.closing();
    painter.finish()
}

/// Logical lines making up the sheet body below the title, before wrapping.
#[derive(Debug, PartialEq)]
enum Line {
    /// Bold section heading at the left margin.
    Section(String),
    /// Regular line at the left margin.
    Entry(String),
    /// Regular line, indented under its section.
    Item(String),
    /// Vertical gap between sections.
    Gap,
}

fn body_lines(recipe: &models::ScaledRecipe) -> Vec<Line> {
    let mut lines = vec![
        Line::Entry(format!("Batch size: {} liters", recipe.batch_liters)),
        Line::Gap,
        Line::Section("Ingredients".to_string()),
        Line::Entry("Malts:".to_string()),
    ];

    for malt in &recipe.ingredients.malts {
        lines.push(Line::Item(format!("{}: {:.2} kg", malt.name, malt.amount)));
    }

    lines.push(Line::Entry("Hops:".to_string()));

    for hop in &recipe.ingredients.hops {
        lines.push(Line::Item(format!(
            "{}: {:.2} kg ({})",
            hop.name, hop.amount, hop.timing
        )));
    }

    if !recipe.ingredients.spices.is_empty() {
        lines.push(Line::Entry("Spices:".to_string()));

        for spice in &recipe.ingredients.spices {
            lines.push(Line::Item(format!(
                "{}: {:.2} kg ({})",
                spice.name, spice.amount, spice.timing
            )));
        }
    }

    lines.push(Line::Entry(format!("Yeast: {}", recipe.ingredients.yeast)));
    lines.push(Line::Entry(format!(
        "Water: {:.2} liters",
        recipe.ingredients.water_liters
    )));
    lines.push(Line::Gap);
    lines.push(Line::Section("Brewing Instructions".to_string()));

    for instruction in &recipe.instructions {
        lines.push(Line::Entry(format!(
            "{}. {}",
            instruction.step, instruction.description
        )));
    }

    lines
}

/// Greedy word wrap so long instruction lines stay inside the margins.
/// Words longer than `columns` are kept whole.
fn wrap(text: &str, columns: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= columns {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Cursor-based painter over printpdf. Coordinates are tracked in
/// millimeters from the top edge and converted to printpdf's bottom-left
/// origin on every draw.
struct Painter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    from_top: f32,
}

impl Painter {
    fn new(title: &str) -> Result<Self, Error> {
        let (doc, page, layer) = PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Page 1");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(Error::assembly)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(Error::assembly)?;
        let layer = doc.get_page(page).get_layer(layer);

        let painter = Self {
            doc,
            layer,
            regular,
            bold,
            from_top: MARGIN_TOP,
        };

        painter.watermark();
        Ok(painter)
    }

    fn baseline(&self) -> Mm {
        Mm(PAGE_HEIGHT - self.from_top)
    }

    /// Paint the diagonal gray brand label under the body of the current page.
    fn watermark(&self) {
        self.layer
            .set_fill_color(Color::Rgb(Rgb::new(0.59, 0.59, 0.59, None)));
        self.layer.begin_text_section();
        self.layer.set_font(&self.bold, WATERMARK_SIZE);
        self.layer.set_text_matrix(TextMatrix::TranslateRotate(
            Pt::from(Mm(45.0)),
            Pt::from(Mm(PAGE_HEIGHT - 160.0)),
            45.0,
        ));
        self.layer.write_text(WATERMARK, &self.bold);
        self.layer.end_text_section();
        self.layer
            .set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
    }

    fn break_page(&mut self) {
        let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Page");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.from_top = MARGIN_TOP;
        self.watermark();
    }

    fn line(&mut self, text: &str, size: f32, indent: f32, bold: bool) {
        if self.from_top + LINE_HEIGHT > PAGE_HEIGHT - MARGIN_BOTTOM {
            self.break_page();
        }

        let font = if bold {
            self.bold.clone()
        } else {
            self.regular.clone()
        };

        self.layer
            .use_text(text, size, Mm(MARGIN_LEFT + indent), self.baseline(), &font);
        self.from_top += LINE_HEIGHT;
    }

    fn space(&mut self, height: f32) {
        self.from_top += height;
    }

    /// Closing line at a fixed offset from the bottom of the last page.
    fn closing(&self) {
        self.layer.use_text(
            CLOSING_LINE,
            CLOSING_SIZE,
            Mm(MARGIN_LEFT),
            Mm(20.0),
            &self.regular,
        );
    }

    fn finish(self) -> Result<Vec<u8>, Error> {
        self.doc.save_to_bytes().map_err(Error::assembly)
    }
}
