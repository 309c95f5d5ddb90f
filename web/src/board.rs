use clueboard_core as trivia;
use trivia::Coord;
use yew::prelude::*;

/// Visual marker of a cell, applied as a CSS class.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum CellMarker {
    Hidden,
    Question,
    Answer,
    Empty,
}

impl CellMarker {
    const fn class(self) -> &'static str {
        use CellMarker::*;
        match self {
            Hidden => "hidden",
            Question => "question",
            Answer => "answer",
            Empty => "empty",
        }
    }

    const fn is_clickable(self) -> bool {
        !matches!(self, Self::Empty)
    }
}

/// Turns what the board says about a cell into the marker and text to show.
pub(crate) fn cell_face(view: trivia::CellView<'_>) -> (CellMarker, AttrValue) {
    use trivia::CellView::*;
    match view {
        Hidden => (CellMarker::Hidden, AttrValue::Static("?")),
        Question(text) => (CellMarker::Question, AttrValue::from(text.to_string())),
        Answer(text) => (CellMarker::Answer, AttrValue::from(text.to_string())),
        Unbound => (CellMarker::Empty, AttrValue::Static("")),
    }
}

/// Marker and text of the cell at `coords`, cells outside the board render empty.
pub(crate) fn board_cell(board: &trivia::Board, coords: trivia::Coord2) -> (CellMarker, AttrValue) {
    board
        .cell_at(coords)
        .map_or((CellMarker::Empty, AttrValue::Static("")), cell_face)
}

/// Message shown in place of, or below, the table.
pub(crate) fn board_notice(board: &trivia::Board) -> Option<&'static str> {
    if board.columns() == 0 {
        Some("No category had enough clues, press restart to try again")
    } else if board.is_complete() {
        Some("Board cleared!")
    } else {
        None
    }
}

fn click_handler(
    marker: CellMarker,
    coords: trivia::Coord2,
    callback: Callback<trivia::Coord2>,
) -> Option<Callback<MouseEvent>> {
    marker.is_clickable().then(|| {
        Callback::from(move |_: MouseEvent| {
            log::trace!("{:?} click", coords);
            callback.emit(coords);
        })
    })
}

pub(crate) fn column_heading(category: &trivia::Category) -> String {
    category.title.to_uppercase()
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct ClueCellProps {
    pub x: Coord,
    pub y: Coord,
    pub marker: CellMarker,
    pub text: AttrValue,
    pub callback: Callback<trivia::Coord2>,
}

#[function_component(ClueCell)]
pub(crate) fn clue_cell(props: &ClueCellProps) -> Html {
    let ClueCellProps {
        x,
        y,
        marker,
        text,
        callback,
    } = props.clone();

    let class = classes!("clue", marker.class());
    let onclick = click_handler(marker, (x, y), callback);

    html! {
        <td {class} id={format!("{}-{}", x, y)} {onclick}>{text.to_string()}</td>
    }
}

/// Renders the category headings and one [`ClueCell`] per grid position.
pub(crate) fn board_table(board: &trivia::Board, callback: &Callback<trivia::Coord2>) -> Html {
    let (cols, rows) = board.size();

    html! {
        <table id="jeopardy">
            <thead>
                <tr>
                    {
                        for board.categories().iter().map(|category| html! {
                            <td>{column_heading(category)}</td>
                        })
                    }
                </tr>
            </thead>
            <tbody>
                {
                    for (0..rows).map(|y| html! {
                        <tr class={format!("row{}", y)}>
                            {
                                for (0..cols).map(|x| {
                                    let (marker, text) = board_cell(board, (x, y));
                                    let callback = callback.clone();
                                    html! {
                                        <ClueCell {x} {y} {marker} {text} {callback}/>
                                    }
                                })
                            }
                        </tr>
                    })
                }
            </tbody>
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_face_follows_reveal_state() {
        use trivia::CellView;

        assert_eq!(
            cell_face(CellView::Hidden),
            (CellMarker::Hidden, AttrValue::from("?"))
        );
        assert_eq!(
            cell_face(CellView::Question("Largest planet")),
            (CellMarker::Question, AttrValue::from("Largest planet"))
        );
        assert_eq!(
            cell_face(CellView::Answer("Jupiter")),
            (CellMarker::Answer, AttrValue::from("Jupiter"))
        );
        assert_eq!(
            cell_face(CellView::Unbound),
            (CellMarker::Empty, AttrValue::from(""))
        );
    }

    fn category(id: u64, clues: usize) -> trivia::Category {
        trivia::Category {
            id: trivia::CategoryId(id),
            title: format!("category {}", id),
            clues: (0..clues)
                .map(|i| trivia::Clue::new(format!("q{}", i), format!("a{}", i)))
                .collect(),
        }
    }

    #[test]
    fn unbound_cell_renders_empty_without_click_handler() {
        let board = trivia::Board::new(vec![category(1, 5), category(2, 3)]);
        let callback = Callback::from(|_: trivia::Coord2| {});

        let (marker, text) = board_cell(&board, (1, 3));
        assert_eq!(marker, CellMarker::Empty);
        assert_eq!(text, AttrValue::from(""));
        assert!(click_handler(marker, (1, 3), callback.clone()).is_none());

        let (marker, text) = board_cell(&board, (1, 2));
        assert_eq!(marker, CellMarker::Hidden);
        assert_eq!(text, AttrValue::from("?"));
        assert!(click_handler(marker, (1, 2), callback).is_some());
    }

    #[test]
    fn notice_for_empty_and_cleared_boards() {
        let mut board = trivia::Board::new(vec![category(1, 1)]);
        assert_eq!(board_notice(&board), None);

        board.handle_cell_click((0, 0)).unwrap();
        board.handle_cell_click((0, 0)).unwrap();
        assert_eq!(board_notice(&board), Some("Board cleared!"));

        let empty = trivia::Board::new(vec![]);
        assert_eq!(
            board_notice(&empty),
            Some("No category had enough clues, press restart to try again")
        );
    }

    #[test]
    fn headings_are_upper_case() {
        let category = trivia::Category {
            id: trivia::CategoryId(1),
            title: "world capitals".to_string(),
            clues: vec![],
        };

        assert_eq!(column_heading(&category), "WORLD CAPITALS");
    }

    #[test]
    fn markers_map_to_distinct_classes() {
        let classes = [
            CellMarker::Hidden,
            CellMarker::Question,
            CellMarker::Answer,
            CellMarker::Empty,
        ]
        .map(CellMarker::class);

        assert_eq!(classes, ["hidden", "question", "answer", "empty"]);
    }
}
