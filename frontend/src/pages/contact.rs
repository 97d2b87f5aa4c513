use super::card_content;
use crate::components::Card;
use kallari_site::form::{ContactForm, Field, FieldKind};
use kallari_site::registry::Contact;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct ContactPageProps {
    pub contact: Contact,
    pub form: ContactForm,
}

/// The contact form is submitted by the browser, straight to the form service.
#[function_component(ContactPage)]
pub fn contact_page(props: &ContactPageProps) -> Html {
    let contact = &props.contact;
    let form = &props.form;

    html!(
        <div class="grid lg:grid-cols-2 gap-6">
            <Card>
                <form
                    action={form.action.clone()}
                    method={form.method}
                    class="grid grid-cols-1 gap-4"
                >
                    { for form.fields.iter().map(field) }
                    <button
                        type="submit"
                        class="rounded-xl px-5 py-3 bg-emerald-600 text-white font-semibold hover:bg-emerald-700"
                    >
                        { contact.submit }
                    </button>
                    <p class="text-xs text-slate-500">{ contact.note }</p>
                </form>
            </Card>
            <Card>
                { card_content(&contact.location) }
                <div class="mt-4 aspect-video rounded-2xl overflow-hidden ring-1 ring-slate-200">
                    <img
                        alt={contact.map.alt}
                        class="w-full h-full object-cover"
                        src={contact.map.src}
                    />
                </div>
            </Card>
        </div>
    )
}

fn field(field: &Field) -> Html {
    match field.kind {
        FieldKind::TextArea => html!(
            <textarea
                key={field.name}
                class="rounded-xl border px-4 py-3 min-h-[120px]"
                name={field.name}
                placeholder={field.placeholder}
                required={field.required}
            />
        ),
        kind => html!(
            <input
                key={field.name}
                class="rounded-xl border px-4 py-3"
                type={kind.input_type()}
                name={field.name}
                placeholder={field.placeholder}
                required={field.required}
            />
        ),
    }
}
