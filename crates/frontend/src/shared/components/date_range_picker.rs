use leptos::prelude::*;
use thaw::*;

/// DateRangePicker component - reusable period selector with two native
/// date inputs, styled to match Thaw UI inputs.
///
/// A partially filled range is reported as-is; the caller decides how to
/// canonicalize it (the dashboard collapses a single date to a one-day
/// range).
#[component]
pub fn DateRangePicker(
    /// "From" date value in yyyy-mm-dd format
    #[prop(into)]
    date_from: Signal<String>,

    /// "To" date value in yyyy-mm-dd format
    #[prop(into)]
    date_to: Signal<String>,

    /// Callback fired when either bound changes (from, to)
    on_change: Callback<(String, String)>,

    /// Optional label for the component
    #[prop(optional)]
    label: Option<String>,
) -> impl IntoView {
    let on_from_change = {
        let on_change = on_change.clone();
        move |new_from: String| {
            let current_to = date_to.get_untracked();
            on_change.run((new_from, current_to));
        }
    };

    let on_to_change = move |new_to: String| {
        let current_from = date_from.get_untracked();
        on_change.run((current_from, new_to));
    };

    view! {
        <style>
            "
            /* Match Thaw Input visuals (bottom stroke differs) */
            .date-range-picker {
                box-sizing: border-box;
                border: 1px solid var(--colorNeutralStroke1, #d1d1d1);
                border-bottom-color: var(--colorNeutralStrokeAccessible, var(--colorNeutralStroke2, rgba(0, 0, 0, 0.25)));
                border-radius: var(--borderRadiusMedium, 4px);
                background: var(--colorNeutralBackground1, #fff);
                min-height: 32px;
                height: 32px;
                box-shadow: none;
            }

            .date-range-picker:focus-within {
                border-color: var(--colorBrandStroke1, var(--color-primary, #3b82f6));
            }

            .date-range-picker input[type=\"date\"] {
                box-sizing: border-box;
                background: transparent;
                border-radius: 0;
                cursor: pointer;
            }

            .date-range-picker input[type=\"date\"]:focus {
                outline: none;
            }
            "
        </style>

        <Flex vertical=true gap=FlexGap::Small>
            {label.map(|l| view! {
                <Label>{l}</Label>
            })}

            <Flex class="date-range-picker" align=FlexAlign::Center gap=FlexGap::Small>
                <input
                    type="date"
                    prop:value=date_from
                    on:input=move |ev| {
                        on_from_change(event_target_value(&ev));
                    }
                    style="
                        margin: 4px 0 4px 4px;
                        padding: 0px 12px;
                        font-size: 0.875rem;
                        border: none;
                        border-radius: var(--borderRadiusMedium, 4px);
                        background: var(--colorNeutralBackground6, #fff);
                        color: var(--colorNeutralForeground1, #242424);
                        width: 130px;
                    "
                />

                <div>"—"</div>

                <input
                    type="date"
                    prop:value=date_to
                    on:input=move |ev| {
                        on_to_change(event_target_value(&ev));
                    }
                    style="
                        margin: 4px 0;
                        padding: 0px 12px;
                        font-size: 0.875rem;
                        border: none;
                        border-radius: var(--borderRadiusMedium, 4px);
                        background: var(--colorNeutralBackground6, #fff);
                        color: var(--colorNeutralForeground1, #242424);
                        width: 130px;
                    "
                />
            </Flex>
        </Flex>
    }
}
