//! Templates compiled into the binary.

use strata_core::{application::ports::TemplateStore, error::StrataResult};

macro_rules! entry {
    ($path:literal) => {
        ($path, include_str!(concat!("../../templates/", $path)))
    };
}

/// Every shipped template, keyed by its path under the template root.
static TEMPLATES: &[(&str, &str)] = &[
    entry!("cleanArchitecture/buildLogic/build.gradle.kts"),
    entry!("cleanArchitecture/buildLogic/conventionPlugins/DataConventionPlugin.kt"),
    entry!("cleanArchitecture/buildLogic/conventionPlugins/DataSourceConventionPlugin.kt"),
    entry!("cleanArchitecture/buildLogic/conventionPlugins/DIConventionPlugin.kt"),
    entry!("cleanArchitecture/buildLogic/conventionPlugins/DomainConventionPlugin.kt"),
    entry!("cleanArchitecture/buildLogic/conventionPlugins/LocalDataSourceConventionPlugin.kt"),
    entry!("cleanArchitecture/buildLogic/conventionPlugins/PresentationConventionPlugin.kt"),
    entry!("cleanArchitecture/buildLogic/conventionPlugins/RemoteDataSourceConventionPlugin.kt"),
    entry!("cleanArchitecture/buildLogic/conventionPlugins/helpers/AndroidLibraryDefaults.kt"),
    entry!("cleanArchitecture/buildLogic/conventionPlugins/helpers/StandardTestDependencies.kt"),
    entry!("cleanArchitecture/buildLogic/conventionPlugins/helpers/TestOptions.kt"),
    entry!("cleanArchitecture/buildLogic/settings.gradle.kts"),
    entry!("cleanArchitecture/module/data.gradle.kts"),
    entry!("cleanArchitecture/module/dataSource.gradle.kts"),
    entry!("cleanArchitecture/module/di.gradle.kts"),
    entry!("cleanArchitecture/module/domain.gradle.kts"),
    entry!("cleanArchitecture/module/localDataSource.gradle.kts"),
    entry!("cleanArchitecture/module/presentation.gradle.kts"),
    entry!("cleanArchitecture/module/remoteDataSource.gradle.kts"),
    entry!("cleanArchitecture/root/data.gradle.kts"),
    entry!("cleanArchitecture/root/di.gradle.kts"),
    entry!("cleanArchitecture/root/presentation.gradle.kts"),
    entry!("presentationScreen/Destination.kt"),
    entry!("presentationScreen/FlowStateHolder.kt"),
    entry!("presentationScreen/Intent.kt"),
    entry!("presentationScreen/NavHost.kt"),
    entry!("presentationScreen/Screen.kt"),
    entry!("presentationScreen/ScreenStateHolder.kt"),
    entry!("presentationScreen/UiState.kt"),
    entry!("presentationScreen/ViewModel.kt"),
    entry!("presentationScreen/ViewModelKoin.kt"),
    entry!("presentationScreen/ViewModelKoinAnnotated.kt"),
    entry!("presentationScreen/ViewModelPlain.kt"),
    entry!("repositoryGenerator/Repository.kt"),
    entry!("repositoryGenerator/RepositoryImpl.kt"),
    entry!("repositoryGenerator/RepositoryModule.kt"),
    entry!("repositoryGenerator/RepositoryModuleKoin.kt"),
    entry!("repositoryGenerator/RepositoryModuleKoinAnnotated.kt"),
    entry!("usecaseGenerator/UseCase.kt"),
    entry!("usecaseGenerator/UseCaseKoin.kt"),
    entry!("usecaseGenerator/UseCaseKoinAnnotated.kt"),
];

/// Read-only store over the templates shipped with strata.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplateStore;

impl EmbeddedTemplateStore {
    pub fn new() -> Self {
        Self
    }

    /// Number of shipped templates.
    pub fn len(&self) -> usize {
        TEMPLATES.len()
    }

    pub fn is_empty(&self) -> bool {
        TEMPLATES.is_empty()
    }
}

impl TemplateStore for EmbeddedTemplateStore {
    fn load(&self, path: &str) -> StrataResult<Option<String>> {
        Ok(TEMPLATES
            .iter()
            .find(|(name, _)| *name == path)
            .map(|(_, body)| (*body).to_string()))
    }

    fn list(&self) -> StrataResult<Vec<String>> {
        Ok(TEMPLATES.iter().map(|(name, _)| (*name).to_string()).collect())
    }
}
