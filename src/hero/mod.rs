use crate::core::{HeroConfig, HeroVariant};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod distortion;
mod particles;

pub use distortion::DistortionHero;
pub use particles::ParticleHero;

/// Whichever background is mounted. Only one exists at a time; it is held
/// for its `Drop`.
#[allow(dead_code)]
pub enum Hero {
    Distortion(DistortionHero),
    Particles(ParticleHero),
}

/// Holder for the home page background.
///
/// GPU setup is async, so a mount can finish after the user has already left
/// the home page. Each mount request carries the generation it was started
/// in; a result from an older generation is dropped on arrival.
#[derive(Default)]
pub struct HeroSlot {
    generation: u64,
    hero: Option<Hero>,
}

impl HeroSlot {
    pub fn mount(slot: &Rc<RefCell<HeroSlot>>, container: web::Element, config: &HeroConfig) {
        let (generation, previous) = {
            let mut s = slot.borrow_mut();
            s.generation += 1;
            (s.generation, s.hero.take())
        };
        drop(previous);
        match config.variant {
            HeroVariant::Particles => match ParticleHero::mount(&container) {
                Ok(hero) => slot.borrow_mut().hero = Some(Hero::Particles(hero)),
                Err(e) => log::error!("[hero] particle mount failed: {:?}", e),
            },
            HeroVariant::Distortion => {
                let slot = slot.clone();
                let image_src = config.image_src.clone();
                let params = config.params;
                spawn_local(async move {
                    match DistortionHero::mount(&container, &image_src, params).await {
                        Ok(hero) => {
                            let mut s = slot.borrow_mut();
                            if s.generation == generation {
                                s.hero = Some(Hero::Distortion(hero));
                            } else {
                                log::info!("[hero] stale mount discarded");
                            }
                        }
                        Err(e) => log::error!("[hero] distortion mount failed: {:?}", e),
                    }
                });
            }
        }
    }

    pub fn unmount(slot: &Rc<RefCell<HeroSlot>>) {
        let hero = {
            let mut s = slot.borrow_mut();
            s.generation += 1;
            s.hero.take()
        };
        // Dropped outside the borrow; teardown logs and touches the DOM.
        drop(hero);
    }
}
