use crate::{
    check_response, next_cursor, parse_status, CycleOutcome, Effect, Msg, Notice, PollState,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PollState, msg: Msg) -> (PollState, Vec<Effect>) {
    let effects = match msg {
        Msg::ResponseReceived(payload) => {
            let rendered = check_response(&payload).and_then(|homework| parse_status(&homework));
            let notice = match rendered {
                Ok(text) => {
                    state.begin_cycle(CycleOutcome::StatusChanged, next_cursor(&payload));
                    Notice::status_changed(text)
                }
                Err(err) if err.kind.is_benign() => {
                    state.begin_cycle(CycleOutcome::Unchanged, next_cursor(&payload));
                    Notice::unchanged()
                }
                Err(err) => {
                    state.begin_cycle(CycleOutcome::Failed(err.kind.clone()), None);
                    Notice::failure(&err)
                }
            };
            vec![Effect::Notify(notice)]
        }
        Msg::FetchFailed(err) => {
            state.begin_cycle(CycleOutcome::Failed(err.kind.clone()), None);
            vec![Effect::Notify(Notice::failure(&err))]
        }
        // Delivery results never produce another notice.
        Msg::NoticeDelivered => {
            state.finish_cycle(true);
            Vec::new()
        }
        Msg::NoticeFailed(_) => {
            state.finish_cycle(false);
            Vec::new()
        }
    };

    (state, effects)
}
