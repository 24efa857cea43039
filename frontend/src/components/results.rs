use shared::{CardDetail, ImageCell, MatchCard, RenderedResults, ResultsBody, SummaryView};
use yew::prelude::*;

pub fn render_results(results: Option<&RenderedResults>) -> Html {
    let Some(results) = results else {
        return html! {};
    };

    html! {
        <section class="results-container">
            { render_summary(&results.summary) }
            {
                match &results.body {
                    ResultsBody::Empty(guidance) => html! {
                        <div class="no-results-message">{ *guidance }</div>
                    },
                    ResultsBody::Cards(cards) => html! {
                        <div id="matches-container">
                            { for cards.iter().map(render_card) }
                        </div>
                    },
                }
            }
        </section>
    }
}

fn render_summary(summary: &SummaryView) -> Html {
    html! {
        <div id="results-summary" class="result-header">
            <h3>{"Summary"}</h3>
            { for summary.lines().into_iter().map(|(label, value)| html! {
                <p><strong>{ format!("{}: ", label) }</strong>{ value }</p>
            })}
        </div>
    }
}

fn render_card(card: &MatchCard) -> Html {
    let judgment_class = match &card.detail {
        CardDetail::Judgment { below_threshold: true, .. } => Some("below-threshold"),
        _ => None,
    };

    html! {
        <div class={classes!("match-item", judgment_class)} key={card.index.to_string()}>
            <div class="match-header">{ &card.headline }</div>
            { render_detail(&card.detail) }
            <div class="match-content">
                { render_image(&card.left) }
                { render_image(&card.right) }
            </div>
        </div>
    }
}

fn render_detail(detail: &CardDetail) -> Html {
    match detail {
        CardDetail::Similarity { .. } => html! {},
        CardDetail::Judgment {
            decision_label,
            score_text,
            reason_lines,
            below_threshold,
        } => html! {
            <div class="judgment">
                <p><strong>{"Decision: "}</strong>{ *decision_label }</p>
                <p><strong>{"Score: "}</strong>{ score_text }</p>
                {
                    if *below_threshold {
                        html! { <p class="threshold-note">{"Score is below the threshold"}</p> }
                    } else {
                        html! {}
                    }
                }
                <p class="reason">
                    <strong>{"Reason: "}</strong>
                    { for reason_lines.iter().enumerate().map(|(i, line)| html! {
                        <>
                            if i > 0 { <br /> }
                            { line }
                        </>
                    })}
                </p>
            </div>
        },
    }
}

fn render_image(cell: &ImageCell) -> Html {
    match cell {
        ImageCell::Present { name, url } => html! {
            <div class="match-image">
                <img src={url.clone()} alt={name.clone()} />
                <div class="label">{ name }</div>
            </div>
        },
        ImageCell::Missing { label } => html! {
            <div class="match-image missing">
                <div class="preview-placeholder">{"No image"}</div>
                <div class="label">{ *label }</div>
            </div>
        },
    }
}
