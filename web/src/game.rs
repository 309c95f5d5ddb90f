use crate::api::{self, ApiError, HttpSource};
use crate::board::{board_notice, board_table};
use crate::utils::*;
use clap::Args;
use clueboard_core as trivia;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use trivia::{FinishOutcome, LoadError, SessionController, SessionTicket};
use yew::prelude::*;

pub trait HasUpdate {
    fn has_update(self) -> bool;
}

impl<E: std::fmt::Display> HasUpdate for Result<trivia::RevealOutcome, E> {
    fn has_update(self) -> bool {
        match self {
            Ok(outcome) => outcome.has_update(),
            Err(err) => {
                log::warn!("click ignored: {}", err);
                false
            }
        }
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Base URL of the trivia service
    #[arg(long, default_value = api::DEFAULT_API_URL)]
    pub api: String,

    /// How many categories to request from the listing
    #[arg(long, default_value_t = trivia::DEFAULT_LISTING_COUNT)]
    pub count: u32,
}

pub(crate) enum Msg {
    StartOrRestart,
    Loaded(SessionTicket, Result<trivia::Board, LoadError<ApiError>>),
    CellClick(trivia::Coord2),
}

#[derive(Debug)]
pub(crate) struct GameView {
    session: SessionController,
    source: HttpSource,
}

impl GameView {
    fn seed(props: &GameProps) -> u64 {
        props.seed.unwrap_or_else(js_random_seed)
    }

    fn start_or_restart(&mut self, ctx: &Context<Self>) {
        let ticket = self.session.restart_game();
        let source = self.source.clone();
        let seed = Self::seed(ctx.props());
        let count = ctx.props().count;
        log::debug!("loading board with seed {}", seed);

        ctx.link().send_future(async move {
            let mut rng = SmallRng::seed_from_u64(seed);
            let result = trivia::load_board(&source, &mut rng, count).await;
            Msg::Loaded(ticket, result)
        });
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            session: SessionController::new(),
            source: HttpSource::new(ctx.props().api.clone()),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            StartOrRestart => {
                self.start_or_restart(ctx);
                true
            }
            Loaded(ticket, result) => {
                matches!(self.session.finish(ticket, result), FinishOutcome::Applied)
            }
            CellClick(coords) => {
                log::debug!("reveal cell: {:?}", coords);
                self.session.handle_cell_click(coords).has_update()
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let cb_start = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::StartOrRestart
        });
        let cb_cell = ctx.link().callback(Msg::CellClick);
        let is_loading = self.session.is_loading();

        html! {
            <div class="clueboard">
                <nav>
                    <button onclick={cb_start}>{self.session.button_label()}</button>
                </nav>
                if is_loading {
                    <div class="loader"/>
                }
                if let Some(err) = self.session.last_error() {
                    <p class="error">{format!("{}, press restart to try again", err)}</p>
                }
                if let Some(board) = self.session.board() {
                    if board.columns() > 0 {
                        {board_table(board, &cb_cell)}
                    }
                    if let Some(notice) = board_notice(board) {
                        <p class="notice">{notice}</p>
                    }
                }
            </div>
        }
    }
}
