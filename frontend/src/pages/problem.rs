use crate::app::use_language;
use yew::prelude::*;

#[function_component(ProblemSection)]
pub fn problem_section() -> Html {
    let language = use_language();
    let active = use_state_eq(|| None::<usize>);
    let t = &language.store.t().problem;

    html! {
        <section class="problem">
            <div class="section-inner">
                <div class="problem-header">
                    <h2>
                        {t.section_title}{" "}
                        <span class="text-danger">{t.section_title_highlight}</span>
                    </h2>
                    <p>{t.description}</p>
                </div>

                <div class="problem-list">
                    { for t.items.iter().enumerate().map(|(index, item)| {
                        let onmouseenter = {
                            let active = active.clone();
                            Callback::from(move |_: MouseEvent| active.set(Some(index)))
                        };
                        let onmouseleave = {
                            let active = active.clone();
                            Callback::from(move |_: MouseEvent| active.set(None))
                        };
                        let class = classes!("problem-row", (*active == Some(index)).then_some("active"));
                        html! {
                            <div key={index} {class} {onmouseenter} {onmouseleave}>
                                <div class="problem-heading">
                                    <span class="problem-label mono">
                                        {format!("{} {:02}", t.error_label, index + 1)}
                                    </span>
                                    <h3>{item.title}</h3>
                                </div>
                                <div class="problem-desc">{item.desc}</div>
                                <div class="problem-dot"></div>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
