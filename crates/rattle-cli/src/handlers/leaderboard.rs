use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use rattle_engine::leaderboard;
use rattle_runtime::Session;

pub fn handle(session: &Session, limit: usize, ctx: &HandlerContext) -> Result<()> {
    let entries = leaderboard(session.deals());
    ctx.render(presenters::present_leaderboard(entries, limit))
}
