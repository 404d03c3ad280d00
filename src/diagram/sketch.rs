use super::{CLASSES, TITLE};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;
const BOX_WIDTH: i32 = 250;
const BOX_HEIGHT: i32 = 200;
const LINE_WIDTH: u32 = 2;

pub const BLACK: Rgb = Rgb(0, 0, 0);
pub const WHITE: Rgb = Rgb(255, 255, 255);

const BOX_COLORS: [Rgb; 4] = [
    Rgb(173, 216, 230), // lightblue
    Rgb(144, 238, 144), // lightgreen
    Rgb(255, 255, 224), // lightyellow
    Rgb(255, 182, 193), // lightpink
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    /// 20 px
    Title,
    /// 16 px
    Body,
}

impl TextSize {
    pub fn px(&self) -> f32 {
        match self {
            TextSize::Title => 20.0,
            TextSize::Body => 16.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub x: i32,
    pub y: i32,
    pub text: String,
    pub size: TextSize,
}

impl TextItem {
    fn new(x: i32, y: i32, text: impl Into<String>, size: TextSize) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            size,
        }
    }
}

/// A filled, outlined class box and the text drawn inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassBox {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub fill: Rgb,
    pub texts: Vec<TextItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub from: (i32, i32),
    pub to: (i32, i32),
    pub width: u32,
}

/// Everything the raster sketch draws, in drawing order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub background: Rgb,
    pub title: TextItem,
    pub boxes: Vec<ClassBox>,
    pub lines: Vec<Line>,
}

/// Two columns of class boxes with hand-placed connecting lines.
pub fn sketch_scene() -> Scene {
    let title = TextItem::new(WIDTH as i32 / 2 - 100, 20, TITLE, TextSize::Title);

    let boxes = CLASSES
        .iter()
        .enumerate()
        .map(|(i, class)| {
            let x = 50 + (i as i32 % 2) * 350;
            let y = 100 + (i as i32 / 2) * 250;

            let mut texts = vec![TextItem::new(x + 10, y + 10, class.name, TextSize::Title)];
            texts.extend(class.attributes.iter().enumerate().map(|(j, attr)| {
                TextItem::new(
                    x + 10,
                    y + 50 + j as i32 * 25,
                    format!("- {}", attr),
                    TextSize::Body,
                )
            }));
            texts.extend(class.methods.iter().enumerate().map(|(j, method)| {
                TextItem::new(
                    x + 10,
                    y + 150 + j as i32 * 25,
                    format!("+ {}", method),
                    TextSize::Body,
                )
            }));

            ClassBox {
                name: class.name.to_string(),
                x,
                y,
                width: BOX_WIDTH as u32,
                height: BOX_HEIGHT as u32,
                fill: BOX_COLORS[i % BOX_COLORS.len()],
                texts,
            }
        })
        .collect();

    let lines = vec![
        Line {
            from: (200, 200),
            to: (350, 300),
            width: LINE_WIDTH,
        },
        Line {
            from: (550, 200),
            to: (400, 300),
            width: LINE_WIDTH,
        },
    ];

    Scene {
        width: WIDTH,
        height: HEIGHT,
        background: WHITE,
        title,
        boxes,
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_named_boxes_in_two_columns() {
        let scene = sketch_scene();

        let placed: Vec<(&str, i32, i32)> = scene
            .boxes
            .iter()
            .map(|b| (b.name.as_str(), b.x, b.y))
            .collect();
        assert_eq!(
            placed,
            vec![
                ("Uživatel", 50, 100),
                ("Systém", 400, 100),
                ("Záznam", 50, 350),
                ("Oprávnění", 400, 350),
            ]
        );
        assert!(scene.boxes.iter().all(|b| b.width == 250 && b.height == 200));
        assert_eq!(scene.boxes[3].fill, Rgb(255, 182, 193));
    }

    #[test]
    fn test_two_literal_lines() {
        let scene = sketch_scene();
        assert_eq!(
            scene.lines,
            vec![
                Line {
                    from: (200, 200),
                    to: (350, 300),
                    width: 2
                },
                Line {
                    from: (550, 200),
                    to: (400, 300),
                    width: 2
                },
            ]
        );
    }

    #[test]
    fn test_box_text_positions() {
        let scene = sketch_scene();
        let system = &scene.boxes[1];

        assert_eq!(system.texts[0], TextItem::new(410, 110, "Systém", TextSize::Title));
        assert_eq!(
            system.texts[1],
            TextItem::new(410, 150, "- konfigurace: dict", TextSize::Body)
        );
        assert_eq!(
            system.texts[4],
            TextItem::new(410, 300, "+ zastavit()", TextSize::Body)
        );
        assert_eq!(system.texts.len(), 1 + 1 + 3);
    }

    #[test]
    fn test_title_and_canvas() {
        let scene = sketch_scene();
        assert_eq!((scene.width, scene.height), (800, 600));
        assert_eq!(scene.background, WHITE);
        assert_eq!(scene.title.x, 300);
        assert_eq!(scene.title.y, 20);
        assert_eq!(scene.title.text, TITLE);
    }
}
